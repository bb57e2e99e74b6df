//! Classification of provider replies

use serde_json::Value;

use crate::error::GenerationError;
use crate::llm::providers::error_utils::{extract_error_message, sanitize_provider_error_text};
use crate::llm::transport::HttpReply;

/// Statuses that mean "slow down": rate limited or temporarily unavailable
pub(super) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 503)
}

/// Terminal failure for a non-success, non-retryable reply.
///
/// Prefers the vendor's own error message over the raw body.
pub(super) fn terminal_failure(reply: &HttpReply) -> GenerationError {
    let message = serde_json::from_str::<Value>(&reply.body)
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| sanitize_provider_error_text(&reply.body));
    GenerationError::http(reply.status, message)
}
