//! CLI commands

pub mod analyze;
pub mod chat;
pub mod models;
pub mod ping;
pub mod report;
pub mod search;
pub mod summarize;

use anyhow::{Context, Result};
use paperiq_core::config::{default_provider, load_provider_config};
use paperiq_core::llm::{LlmClient, LlmProvider};
use paperiq_core::{GenerationError, PaperIqError};
use tracing::debug;

/// Build a client for the requested (or default) provider from the environment
pub fn build_client(provider: Option<LlmProvider>) -> Result<LlmClient> {
    let provider = match provider {
        Some(provider) => provider,
        None => default_provider()?,
    };
    let config = load_provider_config(provider)?;
    debug!(provider = %provider, base_url = %config.base_url, "building LLM client");
    LlmClient::new(config).with_context(|| format!("Could not set up the {} client", provider))
}

/// Suggestions for generation failures anywhere in the error chain
pub fn error_hints(err: &anyhow::Error, console_url: Option<&str>) -> Vec<String> {
    err.chain()
        .find_map(|cause| {
            cause.downcast_ref::<GenerationError>().or_else(|| {
                match cause.downcast_ref::<PaperIqError>() {
                    Some(PaperIqError::Generation(generation)) => Some(generation),
                    _ => None,
                }
            })
        })
        .map(|generation| generation.suggestions(console_url))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_hints_find_wrapped_generation_error() {
        let err = anyhow::Error::from(PaperIqError::from(GenerationError::RateLimitExhausted {
            attempts: 4,
        }))
        .context("Summarization failed");

        let hints = error_hints(&err, Some("https://console.groq.com/"));
        assert!(hints.iter().any(|h| h.contains("console.groq.com")));
    }

    #[test]
    fn test_error_hints_empty_for_other_errors() {
        let err = anyhow::anyhow!("file missing");
        assert!(error_hints(&err, None).is_empty());
    }
}
