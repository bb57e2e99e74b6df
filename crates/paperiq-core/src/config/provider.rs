//! Per-provider client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::llm::provider_types::{LlmProvider, SamplingParameters, TimeoutConfig};
use crate::llm::rate_limiter::RateLimitConfig;

/// Everything needed to build an [`crate::llm::LlmClient`] for one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider: LlmProvider,
    /// API key; never logged
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeouts: TimeoutConfig,
    /// Retries after the first attempt for 429/503/timeouts
    pub max_retries: u32,
    /// `base` in `base * 2^attempt + jitter`
    pub retry_base_delay: Duration,
    pub rate_limit: RateLimitConfig,
    pub sampling: SamplingParameters,
}

impl ProviderConfig {
    /// Defaults for a provider, without an API key
    pub fn for_provider(provider: LlmProvider) -> Self {
        let (base_url, request_timeout_secs, max_retries) = match provider {
            LlmProvider::Gemini => ("https://generativelanguage.googleapis.com", 30, 4),
            LlmProvider::Groq => ("https://api.groq.com", 60, 3),
        };

        Self {
            provider,
            api_key: None,
            base_url: base_url.to_string(),
            timeouts: TimeoutConfig::new().with_request_timeout_secs(request_timeout_secs),
            max_retries,
            retry_base_delay: Duration::from_secs(2),
            rate_limit: RateLimitConfig::for_provider(provider),
            sampling: SamplingParameters::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// API key, if set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key().is_none() {
            return Err(format!(
                "{} API key not provided (set {}_API_KEY)",
                self.provider,
                self.provider.env_prefix()
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        self.timeouts.validate()?;
        self.rate_limit.validate()?;
        Ok(())
    }
}
