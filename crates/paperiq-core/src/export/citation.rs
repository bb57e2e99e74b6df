//! APA and BibTeX citations for arXiv-sourced summaries

use serde::Serialize;

use super::entry::SummaryEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub apa: String,
    pub bibtex: String,
}

/// "Ashish Vaswani" becomes "Vaswani, A."
pub fn format_author(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let Some((last, given)) = parts.split_last() else {
        return name.to_string();
    };
    let initials: String = given
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase().chain(std::iter::once('.')))
        .collect();
    format!("{}, {}", last, initials)
}

/// Build citations when the entry has a URL, a title and at least one author
pub fn build_citation(entry: &SummaryEntry) -> Option<Citation> {
    let meta = &entry.metadata;
    let url = meta.arxiv_url.as_deref().filter(|u| !u.is_empty())?;
    let title = entry.title.trim();
    if title.is_empty() || meta.authors.is_empty() {
        return None;
    }

    let year = meta
        .published
        .as_deref()
        .filter(|p| p.chars().count() >= 4)
        .map(|p| p.chars().take(4).collect::<String>())
        .unwrap_or_else(|| "n.d.".to_string());

    let author_list = meta
        .authors
        .iter()
        .map(|a| format_author(a))
        .collect::<Vec<_>>()
        .join(", ");
    let apa = format!("{} ({}). {}. arXiv. {}", author_list, year, title, url);

    let key_title: String = title
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    let bibtex = format!(
        "@article{{{key}{year},\n  title={{ {title} }},\n  author={{ {authors} }},\n  year={{ {year} }},\n  journal={{arXiv preprint}},\n  url={{ {url} }}\n}}",
        key = key_title,
        year = year,
        title = title,
        authors = meta.authors.join(" and "),
        url = url,
    );

    Some(Citation { apa, bibtex })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{SourceMode, SummaryMetadata};

    fn entry(published: Option<&str>) -> SummaryEntry {
        let mut meta = SummaryMetadata::new(SourceMode::SearchTopic);
        meta.arxiv_url = Some("http://arxiv.org/abs/1706.03762v7".to_string());
        meta.published = published.map(str::to_string);
        meta.authors = vec!["Ashish Vaswani".to_string(), "Noam M. Shazeer".to_string()];
        SummaryEntry::new("Attention Is All You Need", "summary", "input", meta)
    }

    #[test]
    fn test_format_author() {
        assert_eq!(format_author("Ashish Vaswani"), "Vaswani, A.");
        assert_eq!(format_author("noam m. shazeer"), "shazeer, N.M.");
        assert_eq!(format_author("Plato"), "Plato, ");
        assert_eq!(format_author(""), "");
    }

    #[test]
    fn test_apa_and_bibtex() {
        let citation = build_citation(&entry(Some("2017-06-12T17:57:34Z"))).unwrap();

        assert_eq!(
            citation.apa,
            "Vaswani, A., Shazeer, N.M. (2017). Attention Is All You Need. arXiv. http://arxiv.org/abs/1706.03762v7"
        );
        assert!(citation.bibtex.starts_with("@article{attention2017,"));
        assert!(citation.bibtex.contains("author={ Ashish Vaswani and Noam M. Shazeer }"));
        assert!(citation.bibtex.ends_with("}"));
    }

    #[test]
    fn test_missing_year() {
        let citation = build_citation(&entry(None)).unwrap();
        assert!(citation.apa.contains("(n.d.)"));
        assert!(citation.bibtex.starts_with("@article{attentionn.d.,"));
    }

    #[test]
    fn test_requires_url_and_authors() {
        let mut no_url = entry(None);
        no_url.metadata.arxiv_url = None;
        assert!(build_citation(&no_url).is_none());

        let mut no_authors = entry(None);
        no_authors.metadata.authors.clear();
        assert!(build_citation(&no_authors).is_none());
    }
}
