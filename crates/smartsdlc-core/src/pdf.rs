//! Plain-text extraction from uploaded PDF documents.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

/// Errors that can occur while reading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error extracting text from PDF: {0}")]
    InvalidDocument(String),

    #[error("No text found in the PDF")]
    EmptyDocument,
}

/// Extracts the text of every page, in page order, joined with newlines.
///
/// Fails with [`DocumentError::EmptyDocument`] when the document parses but
/// contains no visible text.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, DocumentError> {
    // pdf-extract can panic on malformed input instead of returning an error.
    let pages = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
    }))
    .map_err(|_| DocumentError::InvalidDocument("document could not be parsed".to_string()))?
    .map_err(|e| DocumentError::InvalidDocument(e.to_string()))?;

    // A blank page still contributes its separator.
    let text = pages
        .iter()
        .map(|page| page.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    if text.is_empty() {
        return Err(DocumentError::EmptyDocument);
    }

    Ok(text)
}

/// Returns true when the upload name looks like a PDF.
pub fn is_pdf_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}
