//! Research summarization and the conversational assistant built on [`LlmClient`]
//!
//! [`LlmClient`]: crate::llm::LlmClient

mod assistant;
pub mod prompts;
mod summarizer;

pub use assistant::AssistantContext;
pub use summarizer::{SUMMARY_MAX_CHARS, Summarizer};
