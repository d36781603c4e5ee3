//! The failure-propagating adapter layer.
//!
//! [`FileHandler`] turns the all-success contract of [`TextExtractor`] into a
//! throw-on-failure one, and adds order-preserving batch processing on top.
//! Both operations are stateless, single-shot transformations.

use crate::engine::DocumentEngine;
use crate::errors::HandlerError;
use crate::extractor::TextExtractor;
use crate::source::InputFile;
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates [`TextExtractor`] over one or many files.
pub struct FileHandler {
    extractor: TextExtractor,
}

impl FileHandler {
    pub fn new(engine: Arc<dyn DocumentEngine>) -> Self {
        Self {
            extractor: TextExtractor::new(engine),
        }
    }

    pub fn from_extractor(extractor: TextExtractor) -> Self {
        Self { extractor }
    }

    /// Extracts one file, converting a captured-error result into a propagated
    /// failure whose message equals the result's error string.
    pub async fn process_file(&self, file: &dyn InputFile) -> Result<String, HandlerError> {
        let result = self.extractor.extract(file).await;
        match result.error {
            Some(message) => Err(HandlerError::File(message)),
            None => Ok(result.text),
        }
    }

    /// Extracts every file concurrently and returns their texts in input
    /// order, regardless of completion order.
    ///
    /// The batch is all-or-nothing: the first failure fails the whole call
    /// with that failure's message, and results from files that succeeded
    /// alongside it are discarded. In-flight siblings are not guaranteed to be
    /// cancelled.
    pub async fn process_files<I>(&self, files: &[I]) -> Result<Vec<String>, HandlerError>
    where
        I: InputFile,
    {
        debug!("processing batch of {} files", files.len());
        let tasks = files.iter().map(|file| self.process_file(file));
        try_join_all(tasks)
            .await
            .map_err(|err| HandlerError::Batch(err.to_string()))
    }
}
