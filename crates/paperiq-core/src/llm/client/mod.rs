//! Rate-limited LLM client
//!
//! One client talks to one provider. Every call goes through the same
//! pipeline: response cache, rate limiter, transport with retries, then
//! provider-specific response parsing.

mod accessors;
mod constructor;
mod error_check;
mod generate;
mod retry;
#[cfg(test)]
mod tests;
mod types;

pub use types::LlmClient;
