//! # FileHandler Tests
//!
//! Single-file error translation and fail-fast, order-preserving batch
//! semantics.

use anyhow::Result;
use anytext::{
    DocumentEngine, EngineError, FileHandler, HandlerError, InputFile, MemoryFile, TextExtractor,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

struct NoopEngine;

#[async_trait]
impl DocumentEngine for NoopEngine {
    async fn extract(&self, _data: &[u8]) -> Result<String, EngineError> {
        Ok(String::new())
    }
}

fn handler() -> FileHandler {
    FileHandler::new(Arc::new(NoopEngine))
}

/// A plain-text file whose read suspends for a configurable delay, used to
/// scramble completion order within a batch.
struct SlowFile {
    inner: MemoryFile,
    delay: Duration,
}

impl SlowFile {
    fn new(name: &str, content: &str, delay_ms: u64) -> Self {
        Self {
            inner: MemoryFile::from_text(name, "text/plain", content),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl InputFile for SlowFile {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn media_type(&self) -> &str {
        self.inner.media_type()
    }

    async fn read_text(&self) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        self.inner.read_text().await
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        self.inner.read_bytes().await
    }
}

#[tokio::test]
async fn process_file_returns_the_extracted_text() {
    let file = MemoryFile::from_text("a.txt", "text/plain", "alpha");

    let text = handler().process_file(&file).await.unwrap();

    assert_eq!(text, "alpha");
}

#[tokio::test]
async fn process_file_error_equals_the_extraction_result_error() {
    let file = MemoryFile::new("photo.png", "image/png", Vec::new());

    // The extractor reports the failure as data...
    let extractor = TextExtractor::new(Arc::new(NoopEngine));
    let captured = extractor.extract(&file).await;

    // ...and the handler propagates the very same message.
    let err = handler().process_file(&file).await.unwrap_err();
    assert_eq!(err.to_string(), captured.error.unwrap());
}

#[tokio::test]
async fn batch_output_matches_input_order_despite_completion_order() {
    // The last file resolves long before the first one.
    let files = vec![
        SlowFile::new("first.txt", "one", 80),
        SlowFile::new("second.txt", "two", 40),
        SlowFile::new("third.txt", "three", 5),
    ];

    let texts = handler().process_files(&files).await.unwrap();

    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn batch_is_all_or_nothing_on_any_failure() {
    let files = vec![
        MemoryFile::from_text("a.txt", "text/plain", "a"),
        MemoryFile::new("b.bin", "application/octet-stream", vec![1, 2, 3]),
        MemoryFile::from_text("c.txt", "text/plain", "c"),
    ];

    let err = handler().process_files(&files).await.unwrap_err();

    assert!(matches!(err, HandlerError::Batch(_)));
    // Only the first failure's message survives; no partial results leak out.
    assert_eq!(
        err.to_string(),
        "Unsupported file type: application/octet-stream"
    );
}

#[tokio::test]
async fn empty_batch_yields_an_empty_sequence() {
    let files: Vec<MemoryFile> = Vec::new();

    let texts = handler().process_files(&files).await.unwrap();

    assert!(texts.is_empty());
}
