//! Context-aware replies for the interactive assistant

use serde::{Deserialize, Serialize};

use crate::export::SourceMode;

/// What the user is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantContext {
    pub mode: SourceMode,
    pub has_summary: bool,
}

impl AssistantContext {
    pub fn new(mode: SourceMode, has_summary: bool) -> Self {
        Self { mode, has_summary }
    }

    /// Canned answer for "recommend"/"tip" requests, which never reach the model
    pub(super) fn local_tip(&self, message: &str) -> Option<&'static str> {
        let lowered = message.to_lowercase();
        if !(lowered.contains("recommend") || lowered.contains("tip")) {
            return None;
        }
        Some(if self.has_summary {
            "You can inspect similarity, compression and readability in the analysis section of the summary output."
        } else {
            "Try `paperiq summarize --topic <keyword>` to pull the latest paper from arXiv."
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_tip_depends_on_summary() {
        let before = AssistantContext::new(SourceMode::PasteText, false);
        let after = AssistantContext::new(SourceMode::PasteText, true);

        assert!(before.local_tip("Any TIPS?").unwrap().contains("--topic"));
        assert!(after.local_tip("what do you recommend").unwrap().contains("analysis"));
        assert!(before.local_tip("explain transformers").is_none());
    }
}
