//! The document-engine boundary.
//!
//! Office-format parsing is treated as an opaque capability: given raw bytes,
//! return extracted text or fail with a readable message. Engine crates
//! implement [`DocumentEngine`] and map their internal errors into
//! [`EngineError`], keeping the core library independent of any particular
//! parsing stack.

use async_trait::async_trait;
use thiserror::Error;

/// A generic error type for document engines.
///
/// Each engine is responsible for mapping its specific failures (zip errors,
/// XML errors, PDF errors) into these standardized variants so the extraction
/// layer can treat all engines uniformly.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The bytes were recognized but could not be parsed.
    #[error("Failed to parse document content: {0}")]
    Parse(String),

    /// The bytes match none of the formats the engine knows.
    #[error("Unrecognized document format")]
    UnrecognizedFormat,

    /// An unexpected internal failure.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

/// The contract for a document-extraction engine.
///
/// Engines receive the full file content in buffer mode and decide for
/// themselves what the bytes are; the caller's declared media type is not
/// forwarded.
#[async_trait]
pub trait DocumentEngine: Send + Sync {
    /// Extracts plain text from `data`, or fails with a human-readable reason.
    async fn extract(&self, data: &[u8]) -> Result<String, EngineError>;
}
