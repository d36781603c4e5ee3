//! File inputs.
//!
//! The pipeline reads files through the [`InputFile`] trait: a declared media
//! type, a display name, and the ability to read the full content as text or
//! raw bytes. Files are owned by the caller and only ever read.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A file-like input to the extraction pipeline.
#[async_trait]
pub trait InputFile: Send + Sync {
    /// Display name, used in messages and logs.
    fn name(&self) -> &str;

    /// The caller-declared media type. May be empty or arbitrary; it is the
    /// sole input to classification.
    fn media_type(&self) -> &str;

    /// Reads the full content as text.
    async fn read_text(&self) -> Result<String>;

    /// Reads the full content as raw bytes.
    async fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// An in-memory file, e.g. one received over a message channel.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    data: Vec<u8>,
}

impl MemoryFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Convenience constructor for textual content.
    pub fn from_text(
        name: impl Into<String>,
        media_type: impl Into<String>,
        text: &str,
    ) -> Self {
        Self::new(name, media_type, text.as_bytes().to_vec())
    }
}

#[async_trait]
impl InputFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_text(&self) -> Result<String> {
        String::from_utf8(self.data.clone()).context("file content is not valid UTF-8 text")
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// A file on disk, read lazily through tokio.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl DiskFile {
    pub fn new(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            media_type: media_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InputFile for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_text(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read '{}'", self.path.display()))
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read '{}'", self.path.display()))
    }
}
