//! Groq provider implementation (OpenAI-compatible chat completions)

use serde_json::{Value, json};
use tracing::instrument;

use super::error_utils::{extract_error_message, snippet};
use super::provider_trait::LlmProviderTrait;
use crate::error::{GenerationError, GenerationResult};
use crate::llm::completion::{Completion, GenerationRequest};
use crate::llm::provider_types::SamplingParameters;
use crate::llm::transport::HttpRequest;

/// Groq provider handler
#[derive(Debug, Clone)]
pub struct GroqProvider {
    api_key: String,
    base_url: String,
    sampling: SamplingParameters,
}

impl GroqProvider {
    /// Create a new Groq provider
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

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl LlmProviderTrait for GroqProvider {
    #[instrument(skip(self, request), fields(model = %request.model), level = "debug")]
    fn generate_request(&self, request: &GenerationRequest) -> HttpRequest {
        let body = json!({
            "model": request.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "temperature": self.sampling.temperature,
            "max_tokens": request.max_tokens,
            "top_p": self.sampling.top_p,
        });

        HttpRequest::post(format!("{}/openai/v1/chat/completions", self.base_url), body)
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", self.bearer())
    }

    fn parse_completion(&self, body: &Value) -> GenerationResult<Completion> {
        let choice = &body["choices"][0];

        if let Some(content) = choice["message"]["content"].as_str() {
            let text = content.trim();
            if !text.is_empty() {
                return Ok(Completion::Text(text.to_string()));
            }
        }

        let finish_reason = choice["finish_reason"].as_str().unwrap_or("");
        match finish_reason {
            "length" => {
                return Ok(Completion::Truncated {
                    finish_reason: finish_reason.to_string(),
                });
            }
            "content_filter" => {
                return Ok(Completion::Blocked {
                    finish_reason: finish_reason.to_string(),
                });
            }
            _ => {}
        }

        if let Some(message) = extract_error_message(body) {
            return Err(GenerationError::TransportFailure {
                status: None,
                message,
            });
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
        HttpRequest::get(format!("{}/openai/v1/models", self.base_url))
            .with_header("Authorization", self.bearer())
    }

    fn parse_models(&self, body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m["id"].as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GroqProvider {
        GroqProvider::new("gsk-test", "https://api.groq.com", SamplingParameters::default())
    }

    #[test]
    fn test_generate_request_shape() {
        let request = GenerationRequest::new("llama-3.3-70b-versatile", "Hello");
        let http = provider().generate_request(&request);

        assert_eq!(http.url, "https://api.groq.com/openai/v1/chat/completions");
        assert!(
            http.headers
                .contains(&("Authorization".to_string(), "Bearer gsk-test".to_string()))
        );
        let body = http.body.unwrap();
        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Hello");
        assert_eq!(body["max_tokens"], 2048);
    }

    #[test]
    fn test_parse_text_is_trimmed() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "  Answer \n"}, "finish_reason": "stop"}]
        });
        assert_eq!(
            provider().parse_completion(&body),
            Ok(Completion::Text("Answer".to_string()))
        );
    }

    #[test]
    fn test_parse_sentinels() {
        let body = json!({"choices": [{"message": {"content": null}, "finish_reason": "length"}]});
        assert!(matches!(
            provider().parse_completion(&body),
            Ok(Completion::Truncated { .. })
        ));

        let body = json!({"choices": [{"message": {}, "finish_reason": "content_filter"}]});
        assert!(matches!(
            provider().parse_completion(&body),
            Ok(Completion::Blocked { .. })
        ));
    }

    #[test]
    fn test_parse_error_object() {
        let body = json!({"error": {"message": "invalid key", "type": "invalid_request_error"}});
        let err = provider().parse_completion(&body).unwrap_err();
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_parse_unexpected_shape() {
        let body = json!({"object": "chat.completion", "choices": []});
        match provider().parse_completion(&body) {
            Err(GenerationError::MalformedResponse { finish_reason, snippet }) => {
                assert_eq!(finish_reason, "unknown");
                assert!(snippet.contains("chat.completion"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_list_models() {
        let http = provider().list_models_request();
        assert_eq!(http.url, "https://api.groq.com/openai/v1/models");

        let body = json!({"object": "list", "data": [{"id": "llama-3.1-8b-instant"}, {"id": "whisper-large-v3"}]});
        assert_eq!(
            provider().parse_models(&body),
            vec!["llama-3.1-8b-instant", "whisper-large-v3"]
        );
    }
}
