use thiserror::Error;

/// Failures inside the extraction layer.
///
/// These are captured by [`crate::TextExtractor`] and folded into
/// [`crate::ExtractionResult::error`]; they never reach the extractor's caller
/// as a propagated error.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The declared media type matched no recognized category. Content is
    /// never read in this case.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The file content could not be read as text or bytes.
    #[error("Failed to read file content: {0}")]
    Read(String),

    /// The document engine rejected the content. The engine's own message is
    /// surfaced verbatim.
    #[error("{0}")]
    Engine(String),
}

/// Failures propagated by [`crate::FileHandler`], the boundary where
/// captured-error results become real errors.
///
/// Both variants display the underlying message verbatim, so the text a caller
/// sees for a single file is identical to the corresponding
/// [`crate::ExtractionResult::error`] string, and a failing batch surfaces
/// exactly its first failure's message.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A single file failed to extract.
    #[error("{0}")]
    File(String),

    /// The first failure observed while processing a batch. Outcomes of the
    /// other files in the batch are discarded.
    #[error("{0}")]
    Batch(String),
}
