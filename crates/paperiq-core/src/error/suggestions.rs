//! User-facing hints for generation failures

use super::types::GenerationError;

impl GenerationError {
    /// Short, actionable suggestions for the person running the tool.
    ///
    /// `console_url` is the provider's quota/usage page, when known.
    pub fn suggestions(&self, console_url: Option<&str>) -> Vec<String> {
        match self {
            Self::RateLimitExhausted { .. } => {
                let mut hints = vec!["Wait 60 seconds and try again".to_string()];
                if let Some(url) = console_url {
                    hints.push(format!("Check your quota at: {}", url));
                }
                hints.push("Consider upgrading for higher limits".to_string());
                hints
            }
            Self::Timeout { .. } => vec![
                "Try again with a shorter input".to_string(),
                "Use the 'flash' model for faster responses".to_string(),
            ],
            Self::TransportFailure {
                status: Some(401 | 403),
                ..
            } => vec![
                "Check that your API key is correct".to_string(),
                "Ensure the API key has not expired".to_string(),
            ],
            Self::TransportFailure { status: None, .. } => {
                vec!["Check your network connection".to_string()]
            }
            Self::Config(_) => vec![
                "Set GOOGLE_API_KEY or GROQ_API_KEY in the environment or a .env file".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}
