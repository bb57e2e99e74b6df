//! Summary entry data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::TextAnalysis;
use crate::papers::ArxivPaper;

/// Where the summarized content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    PasteText,
    UploadPdf,
    SearchTopic,
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SourceMode::PasteText => "Paste text",
            SourceMode::UploadPdf => "Upload PDF",
            SourceMode::SearchTopic => "Search topic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub source_mode: SourceMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl SummaryMetadata {
    pub fn new(source_mode: SourceMode) -> Self {
        Self {
            source_mode,
            topic: None,
            arxiv_url: None,
            published: None,
            authors: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Copy link, date, authors and categories from an arXiv paper
    pub fn with_paper(mut self, paper: &ArxivPaper) -> Self {
        self.arxiv_url = Some(paper.link.clone());
        self.published = Some(paper.published.clone());
        self.authors = paper.authors.clone();
        self.categories = paper.categories.clone();
        self
    }
}

/// One generated summary with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub title: String,
    pub summary_text: String,
    pub input_text: String,
    pub created_at: DateTime<Utc>,
    pub metadata: SummaryMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TextAnalysis>,
}

impl SummaryEntry {
    pub fn new(
        title: impl Into<String>,
        summary_text: impl Into<String>,
        input_text: impl Into<String>,
        metadata: SummaryMetadata,
    ) -> Self {
        Self {
            title: title.into(),
            summary_text: summary_text.into(),
            input_text: input_text.into(),
            created_at: Utc::now(),
            metadata,
            analysis: None,
        }
    }

    pub fn with_analysis(mut self, analysis: TextAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_mode_labels() {
        assert_eq!(SourceMode::PasteText.to_string(), "Paste text");
        assert_eq!(SourceMode::SearchTopic.to_string(), "Search topic");
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = SummaryEntry::new(
            "Title",
            "Summary",
            "Input",
            SummaryMetadata::new(SourceMode::UploadPdf),
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["metadata"]["source_mode"], "upload_pdf");
        assert!(json["metadata"].get("topic").is_none());
        assert!(json.get("analysis").is_none());

        let back: SummaryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
