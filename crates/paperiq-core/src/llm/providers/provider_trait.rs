//! Provider trait and unified enum

use serde_json::Value;

use crate::error::GenerationResult;
use crate::llm::completion::{Completion, GenerationRequest};
use crate::llm::transport::HttpRequest;

/// Wire-format adapter for one vendor API.
///
/// Providers are pure: they build [`HttpRequest`]s and interpret reply
/// bodies. Dispatch, retries and rate limiting live in the client.
pub trait LlmProviderTrait: Send + Sync {
    /// Build the text generation request
    fn generate_request(&self, request: &GenerationRequest) -> HttpRequest;

    /// Interpret a successful (2xx) generation reply body
    fn parse_completion(&self, body: &Value) -> GenerationResult<Completion>;

    /// Build the request listing available models
    fn list_models_request(&self) -> HttpRequest;

    /// Interpret a successful model listing reply body
    fn parse_models(&self, body: &Value) -> Vec<String>;
}

/// Unified provider enum that wraps all provider implementations
#[derive(Debug, Clone)]
pub enum ProviderInstance {
    Gemini(super::GeminiProvider),
    Groq(super::GroqProvider),
}

impl LlmProviderTrait for ProviderInstance {
    fn generate_request(&self, request: &GenerationRequest) -> HttpRequest {
        match self {
            Self::Gemini(p) => p.generate_request(request),
            Self::Groq(p) => p.generate_request(request),
        }
    }

    fn parse_completion(&self, body: &Value) -> GenerationResult<Completion> {
        match self {
            Self::Gemini(p) => p.parse_completion(body),
            Self::Groq(p) => p.parse_completion(body),
        }
    }

    fn list_models_request(&self) -> HttpRequest {
        match self {
            Self::Gemini(p) => p.list_models_request(),
            Self::Groq(p) => p.list_models_request(),
        }
    }

    fn parse_models(&self, body: &Value) -> Vec<String> {
        match self {
            Self::Gemini(p) => p.parse_models(body),
            Self::Groq(p) => p.parse_models(body),
        }
    }
}
