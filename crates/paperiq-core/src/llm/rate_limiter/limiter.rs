//! Async sliding-window rate limiter

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use super::types::{RateLimitConfig, RateLimitStatus, WindowState};
use crate::llm::provider_types::LlmProvider;

/// Rate limiter for one client.
///
/// The state lock is held while waiting, so concurrent callers are
/// dispatched one at a time and the window always reflects dispatch order.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Arc<Mutex<WindowState>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(WindowState::default())),
        }
    }

    /// Create a rate limiter with a provider's default limits
    pub fn for_provider(provider: LlmProvider) -> Self {
        Self::new(RateLimitConfig::for_provider(provider))
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the current configuration
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Wait until a dispatch is allowed, then record it.
    ///
    /// Returns the wait duration if the caller had to wait.
    pub async fn acquire(&self) -> Option<Duration> {
        if !self.config.enabled {
            return None;
        }

        let mut state = self.state.lock().await;
        let wait = state.required_wait(Instant::now(), &self.config);

        if let Some(wait) = wait {
            warn!(
                wait_secs = wait.as_secs_f64(),
                in_window = state.recent.len(),
                "rate limit reached, waiting before request"
            );
            sleep(wait).await;
        }

        state.record(Instant::now());
        debug!(in_window = state.recent.len(), "dispatch recorded");
        wait
    }

    /// Current usage of the window
    pub async fn status(&self) -> RateLimitStatus {
        let mut state = self.state.lock().await;
        state.status(Instant::now(), &self.config)
    }
}
