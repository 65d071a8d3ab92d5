use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub mod clipboard;
pub mod pdf;
pub mod text;

/// Load a file's contents as plain text, dispatching on extension.
/// `.pdf` goes through the PDF extractor; everything else is read as-is.
pub fn load(path: &str) -> Result<String, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "pdf" => pdf::load(path),
        _ => text::load(path),
    }
}
