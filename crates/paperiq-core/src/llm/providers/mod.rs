//! Provider-specific request building and response parsing

pub mod error_utils;
pub mod gemini;
pub mod groq;
pub mod provider_trait;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use provider_trait::{LlmProviderTrait, ProviderInstance};
