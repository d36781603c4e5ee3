//! # Input Source Tests
//!
//! Disk-backed files through the pipeline.

use anytext::{DiskFile, DocumentEngine, EngineError, FileHandler, InputFile};
use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;

struct NoopEngine;

#[async_trait]
impl DocumentEngine for NoopEngine {
    async fn extract(&self, _data: &[u8]) -> Result<String, EngineError> {
        Ok(String::new())
    }
}

#[tokio::test]
async fn disk_file_round_trips_through_the_handler() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "from disk").unwrap();

    let file = DiskFile::new(&path, "text/plain");
    assert_eq!(file.name(), "notes.txt");

    let handler = FileHandler::new(Arc::new(NoopEngine));
    let text = handler.process_file(&file).await.unwrap();
    assert_eq!(text, "from disk");
}

#[tokio::test]
async fn missing_disk_file_surfaces_a_read_failure() {
    let dir = TempDir::new().unwrap();
    let file = DiskFile::new(dir.path().join("absent.txt"), "text/plain");

    let handler = FileHandler::new(Arc::new(NoopEngine));
    let err = handler.process_file(&file).await.unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}
