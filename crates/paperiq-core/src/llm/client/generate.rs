//! Text generation entry points

use tracing::{debug, info, instrument, warn};

use super::types::LlmClient;
use crate::error::GenerationResult;
use crate::llm::cache::ResponseCache;
use crate::llm::completion::{Completion, GenerationRequest};
use crate::llm::providers::LlmProviderTrait;

impl LlmClient {
    /// Generate text for `prompt` with `model`, using the response cache.
    ///
    /// `Truncated` and `Blocked` outcomes are returned as [`Completion`]
    /// variants; every failure is a [`crate::error::GenerationError`].
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> GenerationResult<Completion> {
        self.generate_request(GenerationRequest::new(model, prompt).with_max_tokens(max_tokens))
            .await
    }

    /// Generate text for a full [`GenerationRequest`].
    ///
    /// Cache hits return immediately and do not count against the rate limit.
    /// Only `Completion::Text` results are stored.
    #[instrument(
        skip(self, request),
        fields(provider = %self.provider, model = %request.model, max_tokens = request.max_tokens)
    )]
    pub async fn generate_request(&self, request: GenerationRequest) -> GenerationResult<Completion> {
        let cache_key = request
            .use_cache
            .then(|| ResponseCache::key_for(&request.model, &request.prompt));

        if let Some(key) = &cache_key {
            if let Some(text) = self.cache.get(key) {
                info!("using cached response");
                return Ok(Completion::Text(text));
            }
        }

        if let Some(waited) = self.rate_limiter.acquire().await {
            debug!(waited_secs = waited.as_secs_f64(), "rate limiter delayed request");
        }

        let http_request = self.provider_instance.generate_request(&request);
        let body = self.send_with_retry(&http_request).await?;
        let completion = self.provider_instance.parse_completion(&body)?;

        match (&completion, cache_key) {
            (Completion::Text(text), Some(key)) => self.cache.insert(key, text.clone()),
            (Completion::Truncated { finish_reason }, _) => {
                warn!(finish_reason = %finish_reason, "response truncated before any text")
            }
            (Completion::Blocked { finish_reason }, _) => {
                warn!(finish_reason = %finish_reason, "response blocked by safety filter")
            }
            _ => {}
        }

        Ok(completion)
    }
}
