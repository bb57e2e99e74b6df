//! Rate limiter for LLM API calls
//!
//! Sliding-window limiter: at most `max_requests_per_minute` dispatches in any
//! 60 second window, and at least `min_interval` between two dispatches.
//! Each client owns its own limiter, so independent clients never interfere.

mod limiter;
mod types;


pub use limiter::RateLimiter;
pub use types::{RateLimitConfig, RateLimitStatus};
