//! LLM client type definitions

use std::sync::Arc;

use crate::config::provider::ProviderConfig;
use crate::llm::cache::ResponseCache;
use crate::llm::provider_types::LlmProvider;
use crate::llm::providers::ProviderInstance;
use crate::llm::rate_limiter::RateLimiter;
use crate::llm::transport::Transport;

/// LLM client with rate limiting, retries and a response cache.
///
/// Limiter and cache state belong to the instance: two clients never share
/// a request budget or cached responses.
///
/// # Examples
///
/// ```no_run
/// use paperiq_core::config::ProviderConfig;
/// use paperiq_core::llm::{LlmClient, LlmProvider, ModelPreference};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ProviderConfig::for_provider(LlmProvider::Groq).with_api_key("gsk-...");
/// let client = LlmClient::new(config)?;
///
/// let model = client.provider().model_for(ModelPreference::Flash);
/// let completion = client.generate(model, "Explain attention in one line", 100).await?;
/// println!("{:?}", completion.text());
/// # Ok(())
/// # }
/// ```
pub struct LlmClient {
    pub(super) provider: LlmProvider,
    pub(super) config: ProviderConfig,
    pub(super) provider_instance: ProviderInstance,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) rate_limiter: RateLimiter,
    pub(super) cache: ResponseCache,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("provider", &self.provider)
            .field("base_url", &self.config.base_url)
            .field("max_retries", &self.config.max_retries)
            .field("cached_responses", &self.cache.len())
            .finish()
    }
}
