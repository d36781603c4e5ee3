//! Media-type classification.
//!
//! Classification is a pure function of the declared media-type string. File
//! content is never inspected to pick a category; it is only looked at later to
//! decide formatting inside the text path.

/// Office media types handed to the document engine. Exact-match only; no
/// wildcard or prefix matching.
pub const OFFICE_MEDIA_TYPES: [&str; 4] = [
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/pdf",
];

/// The extraction strategy a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    /// `text/plain`: content is returned as-is.
    PlainText,
    /// `application/json`: content is pretty-printed when it parses.
    JsonText,
    /// One of [`OFFICE_MEDIA_TYPES`]: content is delegated to the engine.
    OfficeDocument,
    /// Everything else. No read is attempted.
    Unsupported,
}

impl MediaCategory {
    /// Classifies a declared media type, first match wins.
    pub fn from_media_type(media_type: &str) -> Self {
        match media_type {
            "text/plain" => Self::PlainText,
            "application/json" => Self::JsonText,
            t if OFFICE_MEDIA_TYPES.contains(&t) => Self::OfficeDocument,
            _ => Self::Unsupported,
        }
    }
}
