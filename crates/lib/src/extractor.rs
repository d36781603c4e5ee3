//! The never-failing extraction layer.
//!
//! [`TextExtractor`] maps one input file to one [`ExtractionResult`]. All
//! failure is communicated through the result's `error` field; no code path
//! propagates an error to the caller.

use crate::engine::DocumentEngine;
use crate::errors::ExtractError;
use crate::media::MediaCategory;
use crate::source::InputFile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Fallback message for failures that carry no description of their own.
const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// The outcome of extracting one file.
///
/// Exactly one of the two fields is meaningful: a present `error` implies
/// `text` is empty. A fresh value is produced per call; nothing is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };
        Self {
            text: String::new(),
            error: Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Classifies a file by its declared media type and extracts its text.
pub struct TextExtractor {
    engine: Arc<dyn DocumentEngine>,
}

impl TextExtractor {
    pub fn new(engine: Arc<dyn DocumentEngine>) -> Self {
        Self { engine }
    }

    /// Extracts text from one file.
    ///
    /// This never fails: every path, including unexpected ones, terminates in
    /// a well-formed [`ExtractionResult`].
    pub async fn extract(&self, file: &dyn InputFile) -> ExtractionResult {
        match self.try_extract(file).await {
            Ok(text) => ExtractionResult::ok(text),
            Err(err) => {
                debug!("extraction failed for '{}': {err}", file.name());
                ExtractionResult::failure(err.to_string())
            }
        }
    }

    /// The inner Result-returning layer behind [`Self::extract`].
    async fn try_extract(&self, file: &dyn InputFile) -> Result<String, ExtractError> {
        match MediaCategory::from_media_type(file.media_type()) {
            MediaCategory::PlainText => read_text(file).await,
            MediaCategory::JsonText => Ok(pretty_print_json(&read_text(file).await?)),
            MediaCategory::OfficeDocument => {
                let data = file
                    .read_bytes()
                    .await
                    .map_err(|e| ExtractError::Read(e.to_string()))?;
                self.engine
                    .extract(&data)
                    .await
                    .map_err(|e| ExtractError::Engine(e.to_string()))
            }
            MediaCategory::Unsupported => Err(ExtractError::UnsupportedType(
                file.media_type().to_string(),
            )),
        }
    }
}

async fn read_text(file: &dyn InputFile) -> Result<String, ExtractError> {
    file.read_text()
        .await
        .map_err(|e| ExtractError::Read(e.to_string()))
}

/// Re-serializes valid JSON with 2-space indentation.
///
/// Malformed JSON degrades to plain-text passthrough rather than an error;
/// only genuinely valid documents are reformatted.
fn pretty_print_json(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
