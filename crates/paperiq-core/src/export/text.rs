//! Plain text and JSON export

use std::fs;
use std::path::Path;
use tracing::info;

use super::entry::SummaryEntry;
use crate::error::{PaperIqError, PaperIqResult};

/// Title used when an entry has none
pub const DEFAULT_TITLE: &str = "AI PaperIQ Summary";

/// Title, metadata lines, a blank line, then the summary body
pub fn build_txt(entry: &SummaryEntry) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        display_title(entry),
        metadata_lines(entry).join("\n"),
        entry.summary_text
    )
}

pub(super) fn display_title(entry: &SummaryEntry) -> &str {
    if entry.title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        entry.title.as_str()
    }
}

/// `Source` always, then `Topic`, `URL` and `Published` when present
pub(super) fn metadata_lines(entry: &SummaryEntry) -> Vec<String> {
    let meta = &entry.metadata;
    let mut lines = vec![format!("Source: {}", meta.source_mode)];
    let optional = [
        ("Topic", &meta.topic),
        ("URL", &meta.arxiv_url),
        ("Published", &meta.published),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines
}

pub fn write_txt(entry: &SummaryEntry, path: &Path) -> PaperIqResult<()> {
    fs::write(path, build_txt(entry))
        .map_err(|e| PaperIqError::io_with_path(e.to_string(), path.display().to_string()))?;
    info!(path = %path.display(), "summary exported as text");
    Ok(())
}

pub fn write_json(entry: &SummaryEntry, path: &Path) -> PaperIqResult<()> {
    let json = serde_json::to_string_pretty(entry)?;
    fs::write(path, json)
        .map_err(|e| PaperIqError::io_with_path(e.to_string(), path.display().to_string()))?;
    info!(path = %path.display(), "summary exported as JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{SourceMode, SummaryMetadata};

    #[test]
    fn test_build_txt() {
        let meta = SummaryMetadata::new(SourceMode::SearchTopic).with_topic("graph networks");
        let entry = SummaryEntry::new("", "The body.", "input", meta);

        assert_eq!(
            build_txt(&entry),
            "AI PaperIQ Summary\n\nSource: Search topic\nTopic: graph networks\n\nThe body."
        );
    }

    #[test]
    fn test_write_json_and_txt() {
        let dir = tempfile::tempdir().unwrap();
        let entry = SummaryEntry::new(
            "Title",
            "Body",
            "Input",
            SummaryMetadata::new(SourceMode::PasteText),
        );

        let json_path = dir.path().join("summary.json");
        write_json(&entry, &json_path).unwrap();
        let loaded: SummaryEntry =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(loaded.title, "Title");

        let txt_path = dir.path().join("summary.txt");
        write_txt(&entry, &txt_path).unwrap();
        assert!(fs::read_to_string(&txt_path).unwrap().starts_with("Title\n\n"));
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let entry = SummaryEntry::new("T", "B", "I", SummaryMetadata::new(SourceMode::PasteText));
        let err = write_txt(&entry, Path::new("/nonexistent/dir/out.txt")).unwrap_err();
        assert!(matches!(err, PaperIqError::Io { path: Some(_), .. }));
    }
}
