//! LLM client constructor and initialization logic

use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use super::types::LlmClient;
use crate::config::provider::ProviderConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::llm::cache::ResponseCache;
use crate::llm::provider_types::LlmProvider;
use crate::llm::providers::{GeminiProvider, GroqProvider, ProviderInstance};
use crate::llm::rate_limiter::RateLimiter;
use crate::llm::transport::{ReqwestTransport, Transport};

impl LlmClient {
    /// Create a new LLM client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Config`] if the configuration is invalid
    /// (missing API key, zero rate limit, ...) or the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> GenerationResult<Self> {
        validate(&config)?;

        let http_client = Client::builder()
            .connect_timeout(config.timeouts.connection_timeout())
            .timeout(config.timeouts.request_timeout())
            .build()
            .map_err(|e| GenerationError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            "Created LLM client for provider '{}' with timeouts: connection={}s, request={}s",
            config.provider,
            config.timeouts.connection_timeout_secs,
            config.timeouts.request_timeout_secs
        );

        Self::with_transport(config, Arc::new(ReqwestTransport::new(http_client)))
    }

    /// Create a client that dispatches through the given transport
    pub fn with_transport(
        config: ProviderConfig,
        transport: Arc<dyn Transport>,
    ) -> GenerationResult<Self> {
        validate(&config)?;

        let api_key = config.api_key().unwrap_or_default().to_string();
        let provider_instance = match config.provider {
            LlmProvider::Gemini => ProviderInstance::Gemini(GeminiProvider::new(
                api_key,
                config.base_url.clone(),
                config.sampling,
            )),
            LlmProvider::Groq => ProviderInstance::Groq(GroqProvider::new(
                api_key,
                config.base_url.clone(),
                config.sampling,
            )),
        };

        Ok(Self {
            provider: config.provider,
            rate_limiter: RateLimiter::new(config.rate_limit),
            cache: ResponseCache::new(),
            provider_instance,
            transport,
            config,
        })
    }
}

fn validate(config: &ProviderConfig) -> GenerationResult<()> {
    config.validate().map_err(|e| {
        GenerationError::Config(format!(
            "{} (validating configuration for provider '{}')",
            e, config.provider
        ))
    })
}
