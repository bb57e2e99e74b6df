//! Chat command

use anyhow::Result;
use paperiq_core::export::SourceMode;
use paperiq_core::llm::{Completion, LlmProvider, ModelPreference};
use paperiq_core::summarize::{AssistantContext, Summarizer};

use super::build_client;
use crate::console::CliConsole;

pub async fn execute(
    console: &CliConsole,
    provider: Option<LlmProvider>,
    message: &str,
    model: ModelPreference,
    assistant: bool,
) -> Result<()> {
    let summarizer = Summarizer::new(build_client(provider)?);

    if assistant {
        let context = AssistantContext::new(SourceMode::PasteText, false);
        println!("{}", summarizer.assistant_reply(message, &context).await);
        return Ok(());
    }

    match summarizer.chat(message, model).await? {
        Completion::Text(text) => println!("{}", text),
        other => console.warn(other.notice().unwrap_or("No response text")),
    }
    Ok(())
}
