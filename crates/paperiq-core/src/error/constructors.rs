//! Constructor methods for the error types

use super::types::{GenerationError, PaperIqError};

impl GenerationError {
    /// Create a transport failure carrying an HTTP status
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a transport failure with no HTTP status (connection refused, DNS, ...)
    pub fn network(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: None,
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(finish_reason: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self::MalformedResponse {
            finish_reason: finish_reason.into(),
            snippet: snippet.into(),
        }
    }

    /// HTTP status attached to the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::TransportFailure { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether retrying later could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExhausted { .. } | Self::Timeout { .. }
        ) || matches!(self, Self::TransportFailure { status: None, .. })
    }
}

impl PaperIqError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new arXiv error
    pub fn arxiv(message: impl Into<String>) -> Self {
        Self::Arxiv {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create an arXiv error carrying the HTTP status
    pub fn arxiv_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Arxiv {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new PDF error
    pub fn pdf(message: impl Into<String>) -> Self {
        Self::Pdf {
            message: message.into(),
        }
    }

    /// Create an IO error with the offending path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error naming the field
    pub fn invalid_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}
