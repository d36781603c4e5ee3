//! # anytext-cli
//!
//! Extracts plain text from the files given on the command line and prints it
//! to stdout. The declared media type is inferred from each file's extension;
//! unknown extensions fall through to `application/octet-stream` so the
//! standard unsupported-type error surfaces.

use anyhow::Result;
use anytext::{DiskFile, FileHandler, InputFile};
use anytext_office::OfficeEngine;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract plain text from documents", long_about = None)]
struct Cli {
    /// Files to extract text from
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PPTX: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";
const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Maps a file extension to the declared media type the pipeline classifies
/// on.
fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("docx") => DOCX,
        Some("pptx") => PPTX,
        Some("xlsx") => XLSX,
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let files: Vec<DiskFile> = cli
        .files
        .iter()
        .map(|path| DiskFile::new(path, media_type_for(path)))
        .collect();
    debug!("extracting {} file(s)", files.len());

    let handler = FileHandler::new(Arc::new(OfficeEngine::new()));
    let texts = handler.process_files(&files).await?;

    let banner = files.len() > 1;
    for (file, text) in files.iter().zip(&texts) {
        if banner {
            println!("== {} ==", file.name());
        }
        println!("{text}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_their_media_types() {
        assert_eq!(media_type_for(Path::new("a.txt")), "text/plain");
        assert_eq!(media_type_for(Path::new("a.json")), "application/json");
        assert_eq!(media_type_for(Path::new("a.docx")), DOCX);
        assert_eq!(media_type_for(Path::new("a.PDF")), "application/pdf");
    }

    #[test]
    fn unknown_extensions_fall_through_to_octet_stream() {
        assert_eq!(
            media_type_for(Path::new("a.png")),
            "application/octet-stream"
        );
        assert_eq!(
            media_type_for(Path::new("no_extension")),
            "application/octet-stream"
        );
        // Only the exact table above is mapped; other text-ish extensions are
        // not special-cased.
        assert_eq!(
            media_type_for(Path::new("a.md")),
            "application/octet-stream"
        );
        assert_eq!(
            media_type_for(Path::new("a.log")),
            "application/octet-stream"
        );
    }
}
