use super::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extract text from a PDF file using the pdf-extract crate.
pub fn load(path: &str) -> Result<String, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read the PDF into memory, then extract text from the buffer.
    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))
}
