//! PaperIQ Core Library
//!
//! This crate provides the core functionality for PaperIQ: a rate-limited,
//! caching LLM client (Gemini and Groq), research summarization, arXiv search,
//! PDF text extraction, summary analysis and export.

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod papers;
pub mod summarize;
pub mod utils;

// Re-export commonly used types
pub use analysis::{TextAnalysis, analyze_texts};
pub use config::{ProviderConfig, default_provider, load_provider_config};
pub use error::{GenerationError, GenerationResult, PaperIqError, PaperIqResult};
pub use export::{Citation, SourceMode, SummaryEntry, SummaryMetadata, build_citation, build_txt};
pub use llm::{Completion, GenerationRequest, LlmClient, LlmProvider, ModelPreference};
pub use papers::{ArxivClient, ArxivPaper, ArxivQuery};
pub use summarize::{AssistantContext, Summarizer};
