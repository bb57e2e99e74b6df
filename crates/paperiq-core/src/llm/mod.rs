//! LLM integration
//!
//! - [`providers`]: Gemini and Groq wire formats
//! - [`transport`]: the HTTP boundary
//! - [`rate_limiter`] and [`cache`]: per-client budget and memoization
//! - [`client`]: the rate-limited, retrying, caching client built from those

pub mod cache;
pub mod client;
pub mod completion;
pub mod provider_types;
pub mod providers;
pub mod rate_limiter;
pub mod transport;

pub use cache::{CacheInfo, ResponseCache};
pub use client::LlmClient;
pub use completion::{Completion, DEFAULT_MAX_TOKENS, GenerationRequest};
pub use provider_types::{LlmProvider, ModelPreference, SamplingParameters, TimeoutConfig};
pub use rate_limiter::{RateLimitConfig, RateLimitStatus, RateLimiter};
pub use transport::{HttpReply, HttpRequest, ReqwestTransport, Transport, TransportError};
