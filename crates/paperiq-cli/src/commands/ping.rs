//! Connectivity check

use anyhow::Result;
use paperiq_core::llm::LlmProvider;

use super::build_client;
use crate::console::CliConsole;

pub async fn execute(console: &CliConsole, provider: Option<LlmProvider>) -> Result<()> {
    let client = build_client(provider)?;

    console.info(&format!("Pinging {}...", client.provider()));
    let reply = client.ping().await?;
    console.success(&format!("{} responded: {}", client.provider(), reply.trim()));

    let status = client.rate_limit_status().await;
    console.field(
        "Requests this minute",
        &format!(
            "{} ({} remaining)",
            status.requests_last_minute, status.remaining_in_minute
        ),
    );
    Ok(())
}
