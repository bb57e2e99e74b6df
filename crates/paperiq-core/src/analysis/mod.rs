//! Input versus summary text analysis
//!
//! Compares a source text with its generated summary: sizes, compression,
//! TF-IDF similarity, keyword overlap and readability.

mod readability;
mod stop_words;
mod tfidf;
mod tokenize;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use readability::{count_syllables, flesch_reading_ease};
pub use tfidf::{cosine_similarity, keyword_overlap, top_keywords};
pub use tokenize::{sentence_count, word_count};

/// Keywords reported per side
const TOP_KEYWORDS: usize = 10;

/// Metrics comparing a source text with its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub input_word_count: usize,
    pub summary_word_count: usize,
    pub input_sentence_count: usize,
    pub summary_sentence_count: usize,
    /// Summary words per input word, 3 decimals; 0 for empty input
    pub compression_ratio: f64,
    /// TF-IDF cosine similarity, 4 decimals
    pub cosine_similarity: f64,
    /// Share of the input's top keywords kept by the summary, 4 decimals
    pub keyword_overlap: f64,
    pub flesch_input: f64,
    pub flesch_summary: f64,
    pub top_keywords_input: Vec<String>,
    pub top_keywords_summary: Vec<String>,
}

impl TextAnalysis {
    /// Keywords present in both top lists, in input order
    pub fn common_keywords(&self) -> Vec<&str> {
        self.top_keywords_input
            .iter()
            .filter(|kw| self.top_keywords_summary.contains(kw))
            .map(String::as_str)
            .collect()
    }
}

/// Analyze `summary` against the `input` it was generated from
pub fn analyze_texts(input: &str, summary: &str) -> TextAnalysis {
    let input_word_count = word_count(input);
    let summary_word_count = word_count(summary);

    let compression_ratio = if input_word_count == 0 {
        0.0
    } else {
        round_to(summary_word_count as f64 / input_word_count as f64, 3)
    };

    let analysis = TextAnalysis {
        input_word_count,
        summary_word_count,
        input_sentence_count: sentence_count(input),
        summary_sentence_count: sentence_count(summary),
        compression_ratio,
        cosine_similarity: round_to(cosine_similarity(input, summary), 4),
        keyword_overlap: round_to(keyword_overlap(input, summary), 4),
        flesch_input: round_to(flesch_reading_ease(input), 2),
        flesch_summary: round_to(flesch_reading_ease(summary), 2),
        top_keywords_input: top_keywords(input, TOP_KEYWORDS),
        top_keywords_summary: top_keywords(summary, TOP_KEYWORDS),
    };

    debug!(
        compression = analysis.compression_ratio,
        similarity = analysis.cosine_similarity,
        "text analysis complete"
    );
    analysis
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
