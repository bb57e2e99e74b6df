//! Rate limiter configuration and state types

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

use crate::llm::provider_types::LlmProvider;

/// Length of the sliding window
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Configuration for rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum dispatches inside one window
    pub max_requests_per_minute: u32,
    /// Minimum spacing between two dispatches
    pub min_interval: Duration,
    /// Window length (60 seconds outside of tests)
    pub window: Duration,
    /// Whether rate limiting is enabled
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests_per_minute: 30,
            min_interval: Duration::from_secs(1),
            window: DEFAULT_WINDOW,
            enabled: true,
        }
    }
}

impl RateLimitConfig {
    /// Create a new rate limit configuration
    pub fn new(max_requests_per_minute: u32, min_interval: Duration) -> Self {
        Self {
            max_requests_per_minute,
            min_interval,
            ..Default::default()
        }
    }

    /// Create a disabled rate limiter
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Free-tier limits for a provider
    pub fn for_provider(provider: LlmProvider) -> Self {
        match provider {
            // Groq free tier: 30 RPM, fast responses
            LlmProvider::Groq => Self::new(30, Duration::from_secs(1)),
            // Gemini free tier is stricter
            LlmProvider::Gemini => Self::new(15, Duration::from_secs(2)),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.max_requests_per_minute == 0 {
            return Err("max_requests_per_minute must be greater than 0".to_string());
        }
        if self.window.is_zero() {
            return Err("rate limit window must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Point-in-time view of the limiter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateLimitStatus {
    pub requests_last_minute: usize,
    pub remaining_in_minute: usize,
    pub seconds_until_next_available: f64,
}

/// Dispatch history for one limiter
#[derive(Debug, Default)]
pub(super) struct WindowState {
    /// Dispatch timestamps, oldest first
    pub recent: VecDeque<Instant>,
    pub last_dispatch: Option<Instant>,
}

impl WindowState {
    /// Drop timestamps that fell out of the window
    pub fn evict(&mut self, now: Instant, window: Duration) {
        while let Some(oldest) = self.recent.front() {
            if now.duration_since(*oldest) >= window {
                self.recent.pop_front();
            } else {
                break;
            }
        }
    }

    /// How long the caller must wait before dispatching at `now`
    pub fn required_wait(&mut self, now: Instant, config: &RateLimitConfig) -> Option<Duration> {
        self.evict(now, config.window);

        if self.recent.len() >= config.max_requests_per_minute as usize {
            if let Some(oldest) = self.recent.front() {
                let wait_until = *oldest + config.window;
                if wait_until > now {
                    return Some(wait_until - now);
                }
            }
        }

        if let Some(last) = self.last_dispatch {
            let elapsed = now.duration_since(last);
            if elapsed < config.min_interval {
                return Some(config.min_interval - elapsed);
            }
        }

        None
    }

    pub fn record(&mut self, now: Instant) {
        self.recent.push_back(now);
        self.last_dispatch = Some(now);
    }

    pub fn status(&mut self, now: Instant, config: &RateLimitConfig) -> RateLimitStatus {
        self.evict(now, config.window);
        let in_window = self.recent.len();
        let next_available = self
            .last_dispatch
            .map(|last| config.min_interval.saturating_sub(now.duration_since(last)))
            .unwrap_or_default();

        RateLimitStatus {
            requests_last_minute: in_window,
            remaining_in_minute: (config.max_requests_per_minute as usize).saturating_sub(in_window),
            seconds_until_next_available: next_available.as_secs_f64(),
        }
    }
}
