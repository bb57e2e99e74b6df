//! Summarizer: prompt construction and model selection over an [`LlmClient`]

use tracing::{info, instrument, warn};

use super::assistant::AssistantContext;
use super::prompts::{TRUNCATION_NOTICE, assistant_preamble, chat_prompt, summary_prompt};
use crate::error::{PaperIqError, PaperIqResult};
use crate::llm::{Completion, DEFAULT_MAX_TOKENS, LlmClient, ModelPreference};
use crate::utils::truncate_chars;

/// Longest input (in characters) sent for summarization
pub const SUMMARY_MAX_CHARS: usize = 30_000;

const ASSISTANT_APOLOGY: &str = "I had trouble answering that. Please try again.";

#[derive(Debug)]
pub struct Summarizer {
    client: LlmClient,
}

impl Summarizer {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &LlmClient {
        &self.client
    }

    /// Structured research summary (Title, Summary, Insights, References)
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn summarize(
        &self,
        text: &str,
        preference: ModelPreference,
    ) -> PaperIqResult<Completion> {
        if text.trim().is_empty() {
            return Err(PaperIqError::invalid_field("Nothing to summarize", "text"));
        }

        let content = prepare_content(text);
        let model = self.client.provider().model_for(preference);
        info!(model, "generating summary");

        Ok(self
            .client
            .generate(model, &summary_prompt(&content), DEFAULT_MAX_TOKENS)
            .await?)
    }

    /// Explain a technical question; callers usually pass `ModelPreference::Flash`
    #[instrument(skip(self, question))]
    pub async fn chat(
        &self,
        question: &str,
        preference: ModelPreference,
    ) -> PaperIqResult<Completion> {
        if question.trim().is_empty() {
            return Err(PaperIqError::invalid_field("Question must not be empty", "question"));
        }
        let model = self.client.provider().model_for(preference);
        Ok(self
            .client
            .generate(model, &chat_prompt(question), DEFAULT_MAX_TOKENS)
            .await?)
    }

    /// Reply to an in-app assistant message. Never fails: errors become an apology.
    pub async fn assistant_reply(&self, message: &str, context: &AssistantContext) -> String {
        if let Some(tip) = context.local_tip(message) {
            return tip.to_string();
        }

        let prompt = format!(
            "{}\n\nUser: {}",
            assistant_preamble(&context.mode.to_string(), context.has_summary),
            message
        );

        match self.chat(&prompt, ModelPreference::Flash).await {
            Ok(Completion::Text(text)) => text,
            Ok(other) => other.notice().unwrap_or(ASSISTANT_APOLOGY).to_string(),
            Err(e) => {
                warn!(error = %e, "assistant reply failed");
                ASSISTANT_APOLOGY.to_string()
            }
        }
    }
}

/// Cut overlong input on a character boundary and mark the cut
fn prepare_content(text: &str) -> String {
    let truncated = truncate_chars(text, SUMMARY_MAX_CHARS);
    if truncated.len() < text.len() {
        format!("{}{}", truncated, TRUNCATION_NOTICE)
    } else {
        text.to_string()
    }
}
