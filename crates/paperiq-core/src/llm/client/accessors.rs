//! Accessor and housekeeping methods for LLM client

use tracing::{info, instrument};

use super::types::LlmClient;
use crate::config::provider::ProviderConfig;
use crate::error::GenerationResult;
use crate::llm::cache::CacheInfo;
use crate::llm::completion::GenerationRequest;
use crate::llm::provider_types::{LlmProvider, ModelPreference};
use crate::llm::providers::LlmProviderTrait;
use crate::llm::rate_limiter::RateLimitStatus;

const PING_PROMPT: &str = "Say 'API connection successful!'";
const PING_MAX_TOKENS: u32 = 50;

impl LlmClient {
    /// Get the provider
    pub fn provider(&self) -> LlmProvider {
        self.provider
    }

    /// Get the configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Number of cached responses and a few sample keys
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }

    pub fn clear_cache(&self) {
        let cleared = self.cache.len();
        self.cache.clear();
        info!(cleared, "response cache cleared");
    }

    /// Usage of the current rate-limit window
    pub async fn rate_limit_status(&self) -> RateLimitStatus {
        self.rate_limiter.status().await
    }

    /// Models the API key can use. Not rate limited.
    #[instrument(skip(self), fields(provider = %self.provider))]
    pub async fn list_models(&self) -> GenerationResult<Vec<String>> {
        let request = self.provider_instance.list_models_request();
        let body = self.send_with_retry(&request).await?;
        Ok(self.provider_instance.parse_models(&body))
    }

    /// Round-trip a tiny prompt on the fast model, bypassing the cache
    #[instrument(skip(self), fields(provider = %self.provider))]
    pub async fn ping(&self) -> GenerationResult<String> {
        let model = self.provider.model_for(ModelPreference::Flash);
        let request = GenerationRequest::new(model, PING_PROMPT)
            .with_max_tokens(PING_MAX_TOKENS)
            .without_cache();

        let completion = self.generate_request(request).await?;
        Ok(match completion.notice() {
            Some(notice) => format!("Connected, but no text returned: {}", notice),
            None => completion.into_text().unwrap_or_default(),
        })
    }
}
