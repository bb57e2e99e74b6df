//! Error types for PaperIQ
//!
//! Two layers:
//! - [`GenerationError`]: everything the LLM client can fail with. Transport and
//!   HTTP failures are translated into one of its variants at the dispatch
//!   boundary, so no raw `reqwest` error ever reaches a caller.
//! - [`PaperIqError`]: crate-wide error for the surrounding modules (config,
//!   arXiv search, PDF extraction, export) which wraps `GenerationError`.

mod constructors;
mod suggestions;
mod types;

pub use types::{GenerationError, GenerationResult, PaperIqError, PaperIqResult};
