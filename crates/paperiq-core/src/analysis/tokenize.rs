//! Word, sentence and term tokenization

use once_cell::sync::Lazy;
use regex::Regex;

use super::stop_words::is_stop_word;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:['’]\w+)*").expect("valid word regex"));

// Scoring terms: two or more word characters
static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid term regex"));

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid sentence regex"));

/// Words in `text`, punctuation excluded
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Sentences ending in `.`, `!` or `?`, plus a trailing unterminated one
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Lowercased scoring terms with stop words removed
pub fn terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TERM_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|term| !is_stop_word(term))
        .map(str::to_string)
        .collect()
}
