//! Tests for the rate-limited client, driven through a scripted transport

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::provider::ProviderConfig;
use crate::error::GenerationError;
use crate::llm::client::LlmClient;
use crate::llm::completion::{Completion, GenerationRequest};
use crate::llm::provider_types::LlmProvider;
use crate::llm::rate_limiter::RateLimitConfig;
use crate::llm::testing::{Scripted, ScriptedTransport, groq_text};
use crate::llm::transport::{HttpReply, TransportError};

fn status(code: u16) -> Scripted {
    Ok(HttpReply::new(code, r#"{"error":{"message":"slow down"}}"#))
}

fn groq_config() -> ProviderConfig {
    ProviderConfig::for_provider(LlmProvider::Groq)
        .with_api_key("gsk-test")
        .with_rate_limit(RateLimitConfig::disabled())
}

fn gemini_config() -> ProviderConfig {
    ProviderConfig::for_provider(LlmProvider::Gemini)
        .with_api_key("AIza-test")
        .with_rate_limit(RateLimitConfig::disabled())
}

fn client(config: ProviderConfig, transport: &Arc<ScriptedTransport>) -> LlmClient {
    LlmClient::with_transport(config, transport.clone()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_cache_hit_skips_dispatch() {
    let transport = ScriptedTransport::always(groq_text("cached answer"));
    let client = client(groq_config(), &transport);

    let first = client.generate("llama", "same prompt", 100).await.unwrap();
    let second = client.generate("llama", "same prompt", 100).await.unwrap();

    assert_eq!(first, Completion::Text("cached answer".to_string()));
    assert_eq!(first, second);
    assert_eq!(transport.dispatches(), 1);
    assert_eq!(client.cache_info().cached_responses, 1);
}

#[tokio::test(start_paused = true)]
async fn test_cache_key_includes_model() {
    let transport = ScriptedTransport::always(groq_text("answer"));
    let client = client(groq_config(), &transport);

    client.generate("model-a", "prompt", 100).await.unwrap();
    client.generate("model-b", "prompt", 100).await.unwrap();

    assert_eq!(transport.dispatches(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cache_does_not_confuse_model_prompt_boundary() {
    let transport = ScriptedTransport::new(vec![groq_text("first")], groq_text("second"));
    let client = client(groq_config(), &transport);

    let a = client.generate("m:x", "y", 100).await.unwrap();
    let b = client.generate("m", "x:y", 100).await.unwrap();

    assert_eq!(a.text(), Some("first"));
    assert_eq!(b.text(), Some("second"));
    assert_eq!(transport.dispatches(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retries_rate_limit_then_succeeds() {
    let transport = ScriptedTransport::new(vec![status(429), status(429)], groq_text("finally"));
    let client = client(groq_config(), &transport);

    let completion = client.generate("llama", "prompt", 100).await.unwrap();

    assert_eq!(completion.text(), Some("finally"));
    assert_eq!(transport.dispatches(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_exhausted_after_all_attempts() {
    let transport = ScriptedTransport::always(status(429));
    let client = client(groq_config().with_max_retries(3), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();

    assert_eq!(err, GenerationError::RateLimitExhausted { attempts: 4 });
    assert_eq!(transport.dispatches(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_backoff_grows_exponentially() {
    let transport = ScriptedTransport::always(status(503));
    let client = client(groq_config().with_max_retries(3), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();
    assert_eq!(err, GenerationError::RateLimitExhausted { attempts: 4 });

    let times = transport.dispatch_times();
    let gaps: Vec<Duration> = times.windows(2).map(|w| w[1] - w[0]).collect();
    // 2s, 4s, 8s base plus up to 2s of jitter each
    for (gap, base) in gaps.iter().zip([2, 4, 8]) {
        assert!(*gap >= Duration::from_secs(base), "gap {:?} < {}s", gap, base);
        assert!(*gap < Duration::from_secs(base + 2), "gap {:?} too long", gap);
    }
}

#[tokio::test(start_paused = true)]
async fn test_retry_after_header_is_used() {
    let limited = Ok(HttpReply::new(429, "").with_retry_after(Duration::from_secs(7)));
    let transport = ScriptedTransport::new(vec![limited], groq_text("ok"));
    let client = client(groq_config(), &transport);

    client.generate("llama", "prompt", 100).await.unwrap();

    let times = transport.dispatch_times();
    assert_eq!(times[1] - times[0], Duration::from_secs(7));
}

#[tokio::test(start_paused = true)]
async fn test_min_interval_and_window_budget() {
    let transport = ScriptedTransport::always(groq_text("ok"));
    let config = groq_config().with_rate_limit(RateLimitConfig::new(2, Duration::from_secs(1)));
    let client = client(config, &transport);

    for prompt in ["one", "two", "three"] {
        client.generate("llama", prompt, 100).await.unwrap();
    }

    let times = transport.dispatch_times();
    assert_eq!(times.len(), 3);
    assert!(times[1] - times[0] >= Duration::from_secs(1));
    assert!(times[2] - times[0] >= Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_callers_share_one_budget() {
    let transport = ScriptedTransport::always(groq_text("ok"));
    let config = groq_config().with_rate_limit(RateLimitConfig::new(2, Duration::from_secs(1)));
    let client = Arc::new(client(config, &transport));

    let handles: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|prompt| {
            let client = client.clone();
            tokio::spawn(async move { client.generate("llama", prompt, 100).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let times = transport.dispatch_times();
    assert_eq!(transport.dispatches(), 3);
    assert!(times[1] - times[0] >= Duration::from_secs(1));
    assert!(times[2] - times[0] >= Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_cache_hits_do_not_consume_budget() {
    let transport = ScriptedTransport::always(groq_text("ok"));
    let config = groq_config().with_rate_limit(RateLimitConfig::new(2, Duration::from_secs(1)));
    let client = client(config, &transport);

    client.generate("llama", "prompt", 100).await.unwrap();
    for _ in 0..5 {
        client.generate("llama", "prompt", 100).await.unwrap();
    }

    let status = client.rate_limit_status().await;
    assert_eq!(status.requests_last_minute, 1);
    assert_eq!(status.remaining_in_minute, 1);
}

#[tokio::test(start_paused = true)]
async fn test_gemini_max_tokens_is_truncated_and_not_cached() {
    let body = json!({
        "candidates": [{"content": {"role": "model"}, "finishReason": "MAX_TOKENS"}]
    });
    let transport = ScriptedTransport::always(Ok(HttpReply::new(200, body.to_string())));
    let client = client(gemini_config(), &transport);

    let completion = client.generate("gemini-2.5-flash", "long", 10).await.unwrap();
    assert!(matches!(completion, Completion::Truncated { ref finish_reason } if finish_reason == "MAX_TOKENS"));

    client.generate("gemini-2.5-flash", "long", 10).await.unwrap();
    assert_eq!(transport.dispatches(), 2);
    assert_eq!(client.cache_info().cached_responses, 0);
}

#[tokio::test(start_paused = true)]
async fn test_gemini_safety_block() {
    let body = json!({
        "candidates": [{"finishReason": "SAFETY"}]
    });
    let transport = ScriptedTransport::always(Ok(HttpReply::new(200, body.to_string())));
    let client = client(gemini_config(), &transport);

    let completion = client.generate("gemini-2.5-pro", "prompt", 100).await.unwrap();
    assert!(matches!(completion, Completion::Blocked { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_error_object_in_body() {
    let body = r#"{"error":{"message":"invalid key"}}"#;
    let transport = ScriptedTransport::always(Ok(HttpReply::new(200, body)));
    let client = client(groq_config(), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();
    assert!(matches!(err, GenerationError::TransportFailure { .. }));
    assert!(err.to_string().contains("invalid key"));
}

#[tokio::test(start_paused = true)]
async fn test_client_error_is_not_retried() {
    let body = r#"{"error":{"message":"invalid key","code":401}}"#;
    let transport = ScriptedTransport::always(Ok(HttpReply::new(401, body)));
    let client = client(groq_config(), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();

    assert_eq!(err, GenerationError::http(401, "invalid key"));
    assert_eq!(transport.dispatches(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_timeouts_exhausted() {
    let transport = ScriptedTransport::always(Err(TransportError::Timeout));
    let client = client(groq_config().with_max_retries(2), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();

    assert_eq!(err, GenerationError::Timeout { attempts: 3 });
    assert_eq!(transport.dispatches(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_connection_failure_recovers() {
    let refused = Err(TransportError::Network("connection refused".to_string()));
    let transport = ScriptedTransport::new(vec![refused], groq_text("back online"));
    let client = client(groq_config(), &transport);

    let completion = client.generate("llama", "prompt", 100).await.unwrap();
    assert_eq!(completion.text(), Some("back online"));
    assert_eq!(transport.dispatches(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_connection_failure_exhausted() {
    let transport =
        ScriptedTransport::always(Err(TransportError::Network("connection refused".to_string())));
    let client = client(groq_config().with_max_retries(1), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(transport.dispatches(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_non_json_success_body_is_malformed() {
    let transport = ScriptedTransport::always(Ok(HttpReply::new(200, "<html>oops</html>")));
    let client = client(groq_config(), &transport);

    let err = client.generate("llama", "prompt", 100).await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse { ref snippet, .. } if snippet.contains("oops")));
}

#[tokio::test(start_paused = true)]
async fn test_without_cache_always_dispatches() {
    let transport = ScriptedTransport::always(groq_text("fresh"));
    let client = client(groq_config(), &transport);

    for _ in 0..2 {
        let request = GenerationRequest::new("llama", "prompt").without_cache();
        client.generate_request(request).await.unwrap();
    }

    assert_eq!(transport.dispatches(), 2);
    assert_eq!(client.cache_info().cached_responses, 0);
}

#[tokio::test(start_paused = true)]
async fn test_clients_do_not_share_state() {
    let transport = ScriptedTransport::always(groq_text("ok"));
    let limited = groq_config().with_rate_limit(RateLimitConfig::new(1, Duration::from_secs(1)));
    let first = client(limited.clone(), &transport);
    let second = client(limited, &transport);

    let start = Instant::now();
    first.generate("llama", "prompt", 100).await.unwrap();
    second.generate("llama", "prompt", 100).await.unwrap();

    // Neither the cache nor the one-per-minute budget carried over
    assert_eq!(transport.dispatches(), 2);
    assert!(Instant::now() - start < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_clear_cache() {
    let transport = ScriptedTransport::always(groq_text("ok"));
    let client = client(groq_config(), &transport);

    client.generate("llama", "a", 100).await.unwrap();
    client.generate("llama", "b", 100).await.unwrap();
    let info = client.cache_info();
    assert_eq!(info.cached_responses, 2);
    assert_eq!(info.sample_keys.len(), 2);

    client.clear_cache();
    assert_eq!(client.cache_info().cached_responses, 0);

    client.generate("llama", "a", 100).await.unwrap();
    assert_eq!(transport.dispatches(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_list_models_is_not_rate_limited() {
    let body = json!({"data": [{"id": "llama-3.3-70b-versatile"}, {"id": "llama-3.1-8b-instant"}]});
    let transport = ScriptedTransport::always(Ok(HttpReply::new(200, body.to_string())));
    let config = groq_config().with_rate_limit(RateLimitConfig::new(1, Duration::from_secs(1)));
    let client = client(config, &transport);

    let models = client.list_models().await.unwrap();

    assert_eq!(models, vec!["llama-3.3-70b-versatile", "llama-3.1-8b-instant"]);
    let request = transport.last_request().unwrap();
    assert!(request.url.ends_with("/openai/v1/models"));
    assert_eq!(client.rate_limit_status().await.requests_last_minute, 0);
}

#[tokio::test(start_paused = true)]
async fn test_ping_uses_fast_model_and_skips_cache() {
    let transport = ScriptedTransport::always(groq_text("API connection successful!"));
    let client = client(groq_config(), &transport);

    let reply = client.ping().await.unwrap();

    assert_eq!(reply, "API connection successful!");
    let request = transport.last_request().unwrap();
    let body = request.body.unwrap();
    assert_eq!(body["model"], "llama-3.1-8b-instant");
    assert_eq!(body["max_tokens"], 50);
    assert_eq!(client.cache_info().cached_responses, 0);
}

#[test]
fn test_missing_api_key_is_config_error() {
    let transport = ScriptedTransport::always(groq_text("unused"));
    let config = ProviderConfig::for_provider(LlmProvider::Groq);

    let err = LlmClient::with_transport(config, transport).unwrap_err();
    assert!(matches!(err, GenerationError::Config(ref msg) if msg.contains("GROQ_API_KEY")));
}

#[test]
fn test_new_builds_reqwest_client() {
    let client = LlmClient::new(groq_config()).unwrap();
    assert_eq!(client.provider(), LlmProvider::Groq);
    assert_eq!(client.config().max_retries, 3);
}
