//! Environment variable-based configuration loading
//!
//! Recognised variables (`{PREFIX}` is `GOOGLE` for Gemini, `GROQ` for Groq):
//! - `PAPERIQ_PROVIDER`: default provider (`gemini` or `groq`)
//! - `{PREFIX}_API_KEY`
//! - `{PREFIX}_BASE_URL`
//! - `{PREFIX}_MAX_RETRIES`
//! - `{PREFIX}_REQUESTS_PER_MINUTE`
//! - `{PREFIX}_MIN_INTERVAL_SECS` (fractional seconds allowed)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::provider::ProviderConfig;
use crate::error::{PaperIqError, PaperIqResult};
use crate::llm::provider_types::LlmProvider;

/// Load a provider's configuration from the process environment
pub fn load_provider_config(provider: LlmProvider) -> PaperIqResult<ProviderConfig> {
    load_provider_config_with(provider, |key| env::var(key).ok())
}

/// Load a provider's configuration through an arbitrary lookup function
pub fn load_provider_config_with<F>(provider: LlmProvider, lookup: F) -> PaperIqResult<ProviderConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = provider.env_prefix();
    let var = |name: &str| lookup(&format!("{}_{}", prefix, name));

    let mut config = ProviderConfig::for_provider(provider);

    if let Some(api_key) = var("API_KEY") {
        config.api_key = Some(api_key);
    }

    if let Some(base_url) = var("BASE_URL") {
        config.base_url = base_url;
    }

    if let Some(raw) = var("MAX_RETRIES") {
        config.max_retries = parse_value(&raw, prefix, "MAX_RETRIES", provider)?;
    }

    if let Some(raw) = var("REQUESTS_PER_MINUTE") {
        config.rate_limit.max_requests_per_minute =
            parse_value(&raw, prefix, "REQUESTS_PER_MINUTE", provider)?;
    }

    if let Some(raw) = var("MIN_INTERVAL_SECS") {
        let secs: f64 = parse_value(&raw, prefix, "MIN_INTERVAL_SECS", provider)?;
        config.rate_limit.min_interval = Duration::try_from_secs_f64(secs).map_err(|_| {
            PaperIqError::config(format!("Invalid {}_MIN_INTERVAL_SECS value", prefix))
        })?;
    }

    Ok(config)
}

/// Pick the default provider from the process environment
pub fn default_provider() -> PaperIqResult<LlmProvider> {
    default_provider_with(|key| env::var(key).ok())
}

/// Pick the default provider: `PAPERIQ_PROVIDER` wins, otherwise whichever
/// provider has an API key (Groq first), otherwise Groq.
pub fn default_provider_with<F>(lookup: F) -> PaperIqResult<LlmProvider>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup("PAPERIQ_PROVIDER") {
        return name.parse::<LlmProvider>().map_err(|e| {
            PaperIqError::config_with_context(e, "Reading PAPERIQ_PROVIDER")
        });
    }

    for provider in [LlmProvider::Groq, LlmProvider::Gemini] {
        if lookup(&format!("{}_API_KEY", provider.env_prefix())).is_some() {
            return Ok(provider);
        }
    }

    Ok(LlmProvider::Groq)
}

fn parse_value<T: FromStr>(
    raw: &str,
    prefix: &str,
    name: &str,
    provider: LlmProvider,
) -> PaperIqResult<T> {
    raw.trim().parse().map_err(|_| {
        PaperIqError::config_with_context(
            format!("Invalid {}_{} value", prefix, name),
            format!("Parsing value '{}' for provider '{}'", raw, provider),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_overrides() {
        let config = load_provider_config_with(
            LlmProvider::Groq,
            lookup(&[
                ("GROQ_API_KEY", "gsk-abc"),
                ("GROQ_BASE_URL", "http://localhost:8080"),
                ("GROQ_MAX_RETRIES", "5"),
                ("GROQ_REQUESTS_PER_MINUTE", "10"),
                ("GROQ_MIN_INTERVAL_SECS", "0.5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("gsk-abc"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.rate_limit.max_requests_per_minute, 10);
        assert_eq!(config.rate_limit.min_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_load_ignores_other_provider_vars() {
        let config =
            load_provider_config_with(LlmProvider::Gemini, lookup(&[("GROQ_API_KEY", "gsk")]))
                .unwrap();
        assert!(config.api_key().is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = load_provider_config_with(
            LlmProvider::Groq,
            lookup(&[("GROQ_MAX_RETRIES", "many")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("GROQ_MAX_RETRIES"));

        assert!(
            load_provider_config_with(
                LlmProvider::Groq,
                lookup(&[("GROQ_MIN_INTERVAL_SECS", "-1")]),
            )
            .is_err()
        );

        // Too large for a Duration
        let err = load_provider_config_with(
            LlmProvider::Groq,
            lookup(&[("GROQ_MIN_INTERVAL_SECS", "1e20")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("GROQ_MIN_INTERVAL_SECS"));
        assert!(
            load_provider_config_with(
                LlmProvider::Groq,
                lookup(&[("GROQ_MIN_INTERVAL_SECS", "NaN")]),
            )
            .is_err()
        );
    }

    #[test]
    fn test_default_provider() {
        assert_eq!(default_provider_with(lookup(&[])).unwrap(), LlmProvider::Groq);
        assert_eq!(
            default_provider_with(lookup(&[("GOOGLE_API_KEY", "k")])).unwrap(),
            LlmProvider::Gemini
        );
        assert_eq!(
            default_provider_with(lookup(&[("GOOGLE_API_KEY", "k"), ("PAPERIQ_PROVIDER", "groq")]))
                .unwrap(),
            LlmProvider::Groq
        );
        assert!(default_provider_with(lookup(&[("PAPERIQ_PROVIDER", "openai")])).is_err());
    }
}
