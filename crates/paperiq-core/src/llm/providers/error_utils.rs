//! LLM provider error sanitization helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|access[_-]?token|token|secret|password|authorization)\b\s*[:=]\s*["']?[^"',\s}&]+"#,
    )
    .expect("valid key/value secret regex")
});

// Gemini authenticates with `?key=...` on the URL
static QUERY_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([?&]key=)[^&\s"']+"#).expect("valid query key regex"));

/// Sanitize provider error text by redacting secrets and truncating large payloads.
pub fn sanitize_provider_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    if let Ok(mut json) = serde_json::from_str::<Value>(trimmed) {
        redact_json_value(&mut json);
        let serialized =
            serde_json::to_string(&json).unwrap_or_else(|_| "<unserializable error>".to_string());
        return truncate_with_suffix(serialized);
    }

    truncate_with_suffix(redact_inline_secrets(trimmed))
}

/// Pull the vendor's human readable message out of an `error` object.
///
/// Both Gemini and Groq use `{"error": {"message": "..."}}`; a bare string
/// or any other shape is stringified.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    let message = match error {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message").and_then(|m| m.as_str()) {
            Some(msg) => msg.to_string(),
            None => error.to_string(),
        },
        Value::Null => return None,
        other => other.to_string(),
    };
    Some(redact_inline_secrets(&message))
}

/// First `max_chars` characters of a body, for diagnostics
pub fn snippet(raw: &str, max_chars: usize) -> String {
    let redacted = redact_inline_secrets(raw.trim());
    redacted.chars().take(max_chars).collect()
}

fn redact_json_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_json_value(val);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                redact_json_value(item);
            }
        }
        Value::String(s) => {
            *s = redact_inline_secrets(s);
        }
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.to_ascii_lowercase().replace(['-', ' '], "_");
    normalized == "key"
        || normalized.contains("api_key")
        || normalized.contains("token")
        || normalized.contains("secret")
        || normalized.contains("password")
        || normalized.contains("authorization")
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted_query = QUERY_KEY_RE.replace_all(input, "${1}[REDACTED]");
    let redacted_bearer = BEARER_TOKEN_RE.replace_all(&redacted_query, "Bearer [REDACTED]");
    KEY_VALUE_SECRET_RE
        .replace_all(&redacted_bearer, "$1=[REDACTED]")
        .into_owned()
}

fn truncate_with_suffix(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}
