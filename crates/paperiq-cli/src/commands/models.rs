//! Models listing command

use anyhow::Result;
use colored::*;
use paperiq_core::llm::{LlmProvider, ModelPreference};

use super::build_client;
use crate::console::CliConsole;

pub async fn execute(console: &CliConsole, provider: Option<LlmProvider>) -> Result<()> {
    let client = build_client(provider)?;
    let provider = client.provider();

    console.print_header(&format!("Available models ({})", provider));
    let models = client.list_models().await?;
    if models.is_empty() {
        console.warn("No models returned from API");
    }

    let defaults = [
        provider.model_for(ModelPreference::Pro),
        provider.model_for(ModelPreference::Flash),
    ];
    for model in &models {
        if defaults.contains(&model.as_str()) {
            println!("  • {} {}", model.green(), "(used by PaperIQ)".dimmed());
        } else {
            println!("  • {}", model);
        }
    }
    Ok(())
}
