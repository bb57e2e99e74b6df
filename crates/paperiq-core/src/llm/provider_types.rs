//! LLM provider definitions and request parameters

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout configuration for LLM requests
///
/// - **Connection timeout**: time allowed to establish a connection
/// - **Request timeout**: time allowed for the complete request/response cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in seconds
    #[serde(default = "TimeoutConfig::default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Request timeout in seconds (end-to-end)
    #[serde(default = "TimeoutConfig::default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl TimeoutConfig {
    const fn default_connection_timeout() -> u64 {
        10
    }

    const fn default_request_timeout() -> u64 {
        60
    }

    /// Create a new timeout configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connection timeout in seconds
    pub fn with_connection_timeout_secs(mut self, secs: u64) -> Self {
        self.connection_timeout_secs = secs;
        self
    }

    /// Set request timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Get connection timeout as Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate timeout configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_timeout_secs == 0 {
            return Err("Connection timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.request_timeout_secs < self.connection_timeout_secs {
            return Err(
                "Request timeout must be greater than or equal to connection timeout".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: Self::default_connection_timeout(),
            request_timeout_secs: Self::default_request_timeout(),
        }
    }
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Google Gemini (generateContent REST API)
    Gemini,
    /// Groq (OpenAI-compatible chat completions)
    Groq,
}

impl LlmProvider {
    /// Get the provider name as a string
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "gemini",
            LlmProvider::Groq => "groq",
        }
    }

    /// Environment variable prefix used for this provider's settings
    pub fn env_prefix(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "GOOGLE",
            LlmProvider::Groq => "GROQ",
        }
    }

    /// Where users can inspect their quota
    pub fn console_url(&self) -> &'static str {
        match self {
            LlmProvider::Gemini => "https://aistudio.google.com/",
            LlmProvider::Groq => "https://console.groq.com/",
        }
    }

    /// Resolve a model preference to a concrete model id
    pub fn model_for(&self, preference: ModelPreference) -> &'static str {
        match (self, preference) {
            (LlmProvider::Gemini, ModelPreference::Flash) => "gemini-2.5-flash",
            (LlmProvider::Gemini, _) => "gemini-2.5-pro",
            (LlmProvider::Groq, ModelPreference::Flash) => "llama-3.1-8b-instant",
            (LlmProvider::Groq, _) => "llama-3.3-70b-versatile",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "groq" => Ok(LlmProvider::Groq),
            other => Err(format!(
                "Unknown provider '{}' (expected 'gemini' or 'groq')",
                other
            )),
        }
    }
}

/// Quality vs speed preference used to pick a model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelPreference {
    /// Prefer the most capable model
    #[default]
    Auto,
    /// Most capable model
    Pro,
    /// Fastest model
    Flash,
}

impl std::str::FromStr for ModelPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ModelPreference::Auto),
            "pro" => Ok(ModelPreference::Pro),
            "flash" => Ok(ModelPreference::Flash),
            other => Err(format!(
                "Unknown model preference '{}' (expected auto, pro or flash)",
                other
            )),
        }
    }
}

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParameters {
    /// Temperature (0.0 to 2.0)
    pub temperature: f32,
    /// Top-p sampling
    pub top_p: f32,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
        }
    }
}
