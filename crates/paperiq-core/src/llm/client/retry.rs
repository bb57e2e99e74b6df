//! Retry logic for LLM requests

use rand::Rng;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, instrument, warn};

use super::error_check::{is_retryable_status, terminal_failure};
use super::types::LlmClient;
use crate::error::{GenerationError, GenerationResult};
use crate::llm::providers::error_utils::snippet;
use crate::llm::transport::{HttpRequest, TransportError};

/// Upper bound of the random jitter added after a 429/503
const RATE_LIMIT_JITTER: Duration = Duration::from_secs(2);

/// Upper bound of the random jitter added after a timeout or connection failure
const TRANSIENT_JITTER: Duration = Duration::from_secs(1);

impl LlmClient {
    /// Send a request, retrying rate limits and transient failures.
    ///
    /// # Retry Strategy
    ///
    /// - Retryable: HTTP 429 and 503, timeouts, connection failures
    /// - Delay: `retry_base_delay * 2^attempt` plus jitter, or the server's
    ///   `Retry-After` when it gave one
    /// - Max retries: `ProviderConfig::max_retries`
    ///
    /// Any other non-success status returns immediately. On success the reply
    /// body is parsed as JSON.
    #[instrument(skip(self, request), fields(max_retries = self.config.max_retries))]
    pub(super) async fn send_with_retry(&self, request: &HttpRequest) -> GenerationResult<Value> {
        let max_retries = self.config.max_retries;
        let attempts = max_retries + 1;
        let mut attempt = 0;

        loop {
            let is_last = attempt == max_retries;

            let delay = match self.transport.send(request).await {
                Ok(reply) if reply.is_success() => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt + 1, "request succeeded after retry");
                    }
                    return serde_json::from_str(&reply.body).map_err(|_| {
                        GenerationError::malformed("unknown", snippet(&reply.body, 200))
                    });
                }
                Ok(reply) if is_retryable_status(reply.status) => {
                    if is_last {
                        error!(attempts, status = reply.status, "rate limit retries exhausted");
                        return Err(GenerationError::RateLimitExhausted { attempts });
                    }
                    warn!(
                        status = reply.status,
                        attempt = attempt + 1,
                        max_attempts = attempts,
                        "rate limited by provider"
                    );
                    reply
                        .retry_after
                        .unwrap_or_else(|| self.backoff_delay(attempt, RATE_LIMIT_JITTER))
                }
                Ok(reply) => {
                    let error = terminal_failure(&reply);
                    warn!(error = %error, "non-retryable error");
                    return Err(error);
                }
                Err(TransportError::Timeout) => {
                    if is_last {
                        error!(attempts, "all attempts timed out");
                        return Err(GenerationError::Timeout { attempts });
                    }
                    warn!(attempt = attempt + 1, max_attempts = attempts, "request timed out");
                    self.backoff_delay(attempt, TRANSIENT_JITTER)
                }
                Err(TransportError::Network(message)) => {
                    if is_last {
                        error!(attempts, error = %message, "connection retries exhausted");
                        return Err(GenerationError::network(message));
                    }
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = attempts,
                        error = %message,
                        "connection failed"
                    );
                    self.backoff_delay(attempt, TRANSIENT_JITTER)
                }
            };

            warn!(
                "Retrying in {:.2}s (attempt {}/{})",
                delay.as_secs_f64(),
                attempt + 2,
                attempts
            );
            sleep(delay).await;
            attempt += 1;
        }
    }

    /// `retry_base_delay * 2^attempt` plus uniform jitter in `[0, max_jitter)`
    fn backoff_delay(&self, attempt: u32, max_jitter: Duration) -> Duration {
        let base = self
            .config
            .retry_base_delay
            .saturating_mul(2_u32.saturating_pow(attempt));
        let jitter_ms = max_jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
        };
        base + jitter
    }
}
