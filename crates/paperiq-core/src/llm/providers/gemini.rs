//! Google (Gemini) provider implementation

use serde_json::{Value, json};
use tracing::instrument;

use super::error_utils::{extract_error_message, snippet};
use super::provider_trait::LlmProviderTrait;
use crate::error::{GenerationError, GenerationResult};
use crate::llm::completion::{Completion, GenerationRequest};
use crate::llm::provider_types::SamplingParameters;
use crate::llm::transport::HttpRequest;

/// Finish reasons Gemini reports when a safety filter stopped generation
const BLOCKED_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST"];

/// Google (Gemini) provider handler
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    sampling: SamplingParameters,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        sampling: SamplingParameters,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sampling,
        }
    }
}

impl LlmProviderTrait for GeminiProvider {
    #[instrument(skip(self, request), fields(model = %request.model), level = "debug")]
    fn generate_request(&self, request: &GenerationRequest) -> HttpRequest {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "temperature": self.sampling.temperature,
                "maxOutputTokens": request.max_tokens,
                "topP": self.sampling.top_p,
            }
        });

        HttpRequest::post(url, body).with_header("Content-Type", "application/json")
    }

    fn parse_completion(&self, body: &Value) -> GenerationResult<Completion> {
        let candidate = &body["candidates"][0];

        if let Some(text) = candidate["content"]["parts"][0]["text"].as_str() {
            if !text.trim().is_empty() {
                return Ok(Completion::Text(text.to_string()));
            }
        }

        let finish_reason = candidate["finishReason"].as_str().unwrap_or("");
        if finish_reason == "MAX_TOKENS" {
            return Ok(Completion::Truncated {
                finish_reason: finish_reason.to_string(),
            });
        }
        if BLOCKED_FINISH_REASONS.contains(&finish_reason) {
            return Ok(Completion::Blocked {
                finish_reason: finish_reason.to_string(),
            });
        }

        // The whole prompt was rejected before any candidate was produced
        if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
            return Ok(Completion::Blocked {
                finish_reason: reason.to_string(),
            });
        }

        if let Some(message) = extract_error_message(body) {
            let status = body["error"]["code"].as_u64().map(|code| code as u16);
            return Err(GenerationError::TransportFailure { status, message });
        }

        Err(GenerationError::malformed(
            if finish_reason.is_empty() {
                "unknown"
            } else {
                finish_reason
            },
            snippet(&body.to_string(), 200),
        ))
    }

    fn list_models_request(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/v1beta/models?key={}", self.base_url, self.api_key))
    }

    fn parse_models(&self, body: &Value) -> Vec<String> {
        body["models"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m["name"].as_str())
                    .map(|name| name.trim_start_matches("models/").to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
