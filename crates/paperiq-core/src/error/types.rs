//! Core error types

use thiserror::Error;

/// Result type alias for PaperIQ operations
pub type PaperIqResult<T> = Result<T, PaperIqError>;

/// Result type alias for LLM generation
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Failure of a text generation call.
///
/// Truncated and safety-blocked completions are *not* errors; they are
/// reported through [`crate::llm::Completion`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// HTTP 429/503 kept coming back after every retry
    #[error(
        "Rate limit exceeded after {attempts} attempts. Your API quota may be exhausted; wait about 60 seconds and try again"
    )]
    RateLimitExhausted { attempts: u32 },

    /// The request timed out on every attempt
    #[error("Request timed out after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// Non-retryable HTTP status, vendor error object, or a connection failure
    #[error("{}", transport_failure_message(*status, message))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    /// The response JSON matched no known shape
    #[error("Unexpected response format (finish reason: {finish_reason}): {snippet}")]
    MalformedResponse {
        finish_reason: String,
        snippet: String,
    },

    /// Client could not be built or used with the given configuration
    #[error("Invalid LLM client configuration: {0}")]
    Config(String),
}

fn transport_failure_message(status: Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("API request failed (status {}): {}", code, message),
        None => format!("API request failed: {}", message),
    }
}

/// Main error type for PaperIQ
#[derive(Error, Debug)]
pub enum PaperIqError {
    /// LLM generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// arXiv search errors (network or feed parsing)
    #[error("arXiv error: {message}")]
    Arxiv {
        message: String,
        status_code: Option<u16>,
    },

    /// PDF extraction errors
    #[error("PDF error: {message}")]
    Pdf { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Export/serialization errors
    #[error("Export error: {message}")]
    Export { message: String },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },
}

impl From<std::io::Error> for PaperIqError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for PaperIqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}
