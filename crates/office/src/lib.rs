//! # anytext-office: Default Document Engine
//!
//! Implements the [`DocumentEngine`] trait from the core `anytext` library for
//! office formats: PDF and the OOXML trio (DOCX, PPTX, XLSX). The format is
//! detected from the bytes themselves, buffer mode only; the caller's declared
//! media type is not consulted here.

mod docx;
mod pdf_text;
mod pptx;
mod sheet;

use anytext::{DocumentEngine, EngineError};
use async_trait::async_trait;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Errors raised while cracking open a document container.
#[derive(Error, Debug)]
pub enum OfficeError {
    #[error("Failed to parse PDF content: {0}")]
    Pdf(String),

    #[error("Failed to read document container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("Failed to parse document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Failed to read document entry: {0}")]
    Entry(#[from] std::io::Error),

    #[error("Unrecognized document format")]
    Unrecognized,
}

/// Maps the engine's specific failures into the standardized variants the
/// extraction layer understands.
impl From<OfficeError> for EngineError {
    fn from(err: OfficeError) -> Self {
        match err {
            OfficeError::Unrecognized => EngineError::UnrecognizedFormat,
            other => EngineError::Parse(other.to_string()),
        }
    }
}

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// The default, batteries-included document engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfficeEngine;

impl OfficeEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentEngine for OfficeEngine {
    async fn extract(&self, data: &[u8]) -> Result<String, EngineError> {
        Ok(extract_buffer(data)?)
    }
}

/// Synchronous buffer-mode extraction, dispatched on magic bytes.
pub fn extract_buffer(data: &[u8]) -> Result<String, OfficeError> {
    if data.starts_with(PDF_MAGIC) {
        debug!("buffer identified as PDF");
        return pdf_text::extract(data);
    }
    if data.starts_with(ZIP_MAGIC) {
        return extract_ooxml(data);
    }
    Err(OfficeError::Unrecognized)
}

/// Tells the OOXML flavors apart by their well-known package entries. The
/// archive is opened once and handed down; the spreadsheet path alone takes
/// the raw bytes, since calamine reads the whole package itself.
fn extract_ooxml(data: &[u8]) -> Result<String, OfficeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;

    if archive.file_names().any(|n| n == "word/document.xml") {
        debug!("OOXML container identified as DOCX");
        docx::extract(&mut archive)
    } else if archive.file_names().any(|n| n.starts_with("ppt/slides/slide")) {
        debug!("OOXML container identified as PPTX");
        pptx::extract(&mut archive)
    } else if archive.file_names().any(|n| n == "xl/workbook.xml") {
        debug!("OOXML container identified as XLSX");
        sheet::extract(data)
    } else {
        Err(OfficeError::Unrecognized)
    }
}
