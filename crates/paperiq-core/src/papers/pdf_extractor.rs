//! PDF text extraction
//!
//! Wraps the pdf-extract crate with checks for:
//! - Non-PDF input (missing `%PDF` magic)
//! - Oversized files
//! - Scanned/image-only PDFs that yield no text

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::{PaperIqError, PaperIqResult};

/// Largest PDF accepted (50 MiB)
pub const MAX_PDF_BYTES: usize = 50 * 1024 * 1024;

/// Extract the text of every page, in order
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> PaperIqResult<String> {
    if pdf_bytes.len() < 4 || &pdf_bytes[0..4] != b"%PDF" {
        return Err(PaperIqError::pdf("Input is not a valid PDF file"));
    }
    if pdf_bytes.len() > MAX_PDF_BYTES {
        return Err(too_large(pdf_bytes.len() as u64));
    }

    // pdf-extract panics on some malformed documents
    let text = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(pdf_bytes)))
        .map_err(|_| PaperIqError::pdf("PDF parser crashed on this document"))?
        .map_err(|e| PaperIqError::pdf(format!("Failed to extract text: {}", e)))?;

    if text.trim().is_empty() {
        return Err(PaperIqError::pdf(
            "No extractable text found (the PDF may be scanned or image-only)",
        ));
    }

    debug!(chars = text.chars().count(), "extracted PDF text");
    Ok(text)
}

#[instrument(skip(path), fields(path = %path.display()))]
pub fn extract_text_from_path(path: &Path) -> PaperIqResult<String> {
    let io_err = |e: std::io::Error| PaperIqError::io_with_path(e.to_string(), path.display().to_string());

    // Refuse before reading the whole file into memory
    let len = std::fs::metadata(path).map_err(io_err)?.len();
    if len > MAX_PDF_BYTES as u64 {
        return Err(too_large(len));
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    extract_text_from_pdf(&bytes)
}

fn too_large(len: u64) -> PaperIqError {
    PaperIqError::pdf(format!(
        "PDF too large: {} MB (limit {} MB)",
        len / 1024 / 1024,
        MAX_PDF_BYTES / 1024 / 1024
    ))
}
