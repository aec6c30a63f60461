//! Text extractor collaborator — best-effort plain text from uploaded bytes.
//!
//! Format handling is deliberately thin: PDFs go through `pdf-extract`,
//! everything else is read as UTF-8 with lossy replacement. The engine
//! downstream only ever sees decoded text.

use crate::errors::AppError;

pub fn extract_text(data: &[u8], filename: &str) -> Result<String, AppError> {
    if filename.to_lowercase().ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e}")))
    } else {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
