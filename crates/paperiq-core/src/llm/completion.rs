//! Generation request and result types

use serde::{Deserialize, Serialize};

/// Default output token cap for generation requests
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// A single text generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model id as understood by the provider
    pub model: String,
    /// Prompt text sent as a single user message
    pub prompt: String,
    /// Maximum tokens in the response
    pub max_tokens: u32,
    /// Serve identical requests from the response cache
    pub use_cache: bool,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            use_cache: true,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Outcome of a call that reached the provider and got a well-formed answer.
///
/// `Truncated` and `Blocked` mean the call completed but produced no usable
/// text; callers must branch on them rather than treat them as success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Completion {
    /// Generated text
    Text(String),
    /// Generation stopped at the token cap before producing text
    Truncated { finish_reason: String },
    /// Generation refused by the provider's safety/content filter
    Blocked { finish_reason: String },
}

impl Completion {
    /// Generated text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Completion::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consume and return the text, if any
    pub fn into_text(self) -> Option<String> {
        match self {
            Completion::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Completion::Text(_))
    }

    /// Human readable explanation for the sentinel outcomes
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Completion::Text(_) => None,
            Completion::Truncated { .. } => Some(
                "Response truncated - text too long. Try using a shorter input or the 'flash' model.",
            ),
            Completion::Blocked { .. } => Some("Content blocked by safety filters."),
        }
    }
}
