//! # anytext: file-to-text extraction
//!
//! This crate turns files into plain text. A file is classified by its declared
//! media type and routed to one of three strategies: plain-text passthrough,
//! JSON pretty-printing, or delegation to a pluggable document engine for
//! office formats.
//!
//! The API is layered in two surfaces:
//!
//! - [`TextExtractor`] never fails: every outcome, including every failure, is
//!   reported as data through an [`ExtractionResult`].
//! - [`FileHandler`] adapts that contract into ordinary `Result`s and adds
//!   order-preserving, fail-fast batch processing.
//!
//! Office-format parsing is not implemented here. It lives behind the
//! [`DocumentEngine`] trait so that engine crates can be swapped in the same
//! way ingestion plugins are elsewhere; `anytext-office` provides the default.

pub mod engine;
pub mod errors;
pub mod extractor;
pub mod handler;
pub mod media;
pub mod source;

pub use engine::{DocumentEngine, EngineError};
pub use errors::{ExtractError, HandlerError};
pub use extractor::{ExtractionResult, TextExtractor};
pub use handler::FileHandler;
pub use media::{MediaCategory, OFFICE_MEDIA_TYPES};
pub use source::{DiskFile, InputFile, MemoryFile};
