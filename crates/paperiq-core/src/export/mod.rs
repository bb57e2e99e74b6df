//! Summary history entries, citations and file export (text, JSON, PDF)

mod citation;
mod entry;
mod pdf;
mod text;

pub use citation::{Citation, build_citation, format_author};
pub use entry::{SourceMode, SummaryEntry, SummaryMetadata};
pub use pdf::{build_pdf, write_pdf};
pub use text::{DEFAULT_TITLE, build_txt, write_json, write_txt};
