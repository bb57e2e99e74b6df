//! Paper sources: arXiv search and PDF text extraction

pub mod arxiv;
pub mod pdf_extractor;

pub use arxiv::{ArxivClient, ArxivPaper, ArxivQuery, SortBy};
pub use pdf_extractor::{MAX_PDF_BYTES, extract_text_from_path, extract_text_from_pdf};
