//! arXiv Atom API search
//!
//! The feed is scanned as text rather than parsed into a DOM: entries,
//! child elements and attributes are located by tag name.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::error::{PaperIqError, PaperIqResult};
use crate::llm::providers::error_utils::sanitize_provider_error_text;

pub const ARXIV_API_BASE: &str = "http://export.arxiv.org/api/query";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// One paper from a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxivPaper {
    pub title: String,
    /// Abstract, whitespace collapsed
    pub summary: String,
    pub published: String,
    /// Abstract page URL (the entry id)
    pub link: String,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    SubmittedDate,
    LastUpdatedDate,
    Relevance,
}

impl SortBy {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            SortBy::SubmittedDate => "submittedDate",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::Relevance => "relevance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArxivQuery {
    pub query: String,
    pub max_results: u32,
    /// arXiv category filter such as `cs.LG`
    pub category: Option<String>,
    pub sort_by: SortBy,
}

impl ArxivQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 5,
            category: None,
            sort_by: SortBy::default(),
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.trim().is_empty()).then_some(category);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// `all:{query}`, plus ` AND cat:{category}` when filtered
    pub fn search_query(&self) -> String {
        let mut search_query = format!("all:{}", self.query.trim());
        if let Some(category) = &self.category {
            search_query.push_str(&format!(" AND cat:{}", category.trim()));
        }
        search_query
    }
}

/// Full request URL for a query against `base`
pub fn build_query_url(base: &str, query: &ArxivQuery) -> PaperIqResult<Url> {
    if query.query.trim().is_empty() {
        return Err(PaperIqError::invalid_field("Search topic must not be empty", "query"));
    }

    let max_results = query.max_results.to_string();
    Url::parse_with_params(
        base,
        &[
            ("search_query", query.search_query().as_str()),
            ("start", "0"),
            ("max_results", max_results.as_str()),
            ("sortBy", query.sort_by.as_api_str()),
            ("sortOrder", "descending"),
        ],
    )
    .map_err(|e| PaperIqError::arxiv(format!("Invalid arXiv URL: {}", e)))
}

/// HTTP client for the arXiv API
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http_client: Client,
    base_url: String,
}

impl ArxivClient {
    pub fn new() -> PaperIqResult<Self> {
        Self::with_base_url(ARXIV_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> PaperIqResult<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PaperIqError::arxiv(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Newest papers matching the query
    #[instrument(skip(self), fields(query = %query.query))]
    pub async fn search(&self, query: &ArxivQuery) -> PaperIqResult<Vec<ArxivPaper>> {
        let url = build_query_url(&self.base_url, query)?;
        debug!(url = %url, "arXiv search");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                PaperIqError::arxiv(format!(
                    "arXiv request failed: {}",
                    sanitize_provider_error_text(&e.to_string())
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaperIqError::arxiv_status(
                format!("arXiv API returned status {}", status),
                status.as_u16(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PaperIqError::arxiv(format!("Failed to read arXiv response: {}", e)))?;

        let papers = parse_atom_feed(&body)?;
        info!(count = papers.len(), "arXiv search complete");
        Ok(papers)
    }
}

/// Parse an Atom feed into papers. Entries without an id or title are skipped.
pub fn parse_atom_feed(xml: &str) -> PaperIqResult<Vec<ArxivPaper>> {
    if !xml.contains("<feed") {
        return Err(PaperIqError::arxiv("Response is not an Atom feed"));
    }
    Ok(blocks(xml, "entry")
        .into_iter()
        .filter_map(parse_entry)
        .collect())
}

fn parse_entry(entry: &str) -> Option<ArxivPaper> {
    let link = decode_entities(&tag_text(entry, "id")?);
    let title = normalize_whitespace(&decode_entities(&tag_text(entry, "title")?));
    let summary = normalize_whitespace(&decode_entities(
        &tag_text(entry, "summary").unwrap_or_default(),
    ));
    let published = tag_text(entry, "published").unwrap_or_default();

    let authors = blocks(entry, "author")
        .into_iter()
        .filter_map(|author| tag_text(author, "name"))
        .map(|name| normalize_whitespace(&decode_entities(&name)))
        .collect();

    let categories = open_tags(entry, "category")
        .into_iter()
        .filter_map(|tag| attribute(tag, "term"))
        .collect();

    Some(ArxivPaper {
        title,
        summary,
        published,
        link,
        authors,
        categories,
    })
}

/// Every `<tag>...</tag>` block, outer tags included
fn blocks<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(pos) = xml[from..].find(&open) {
        let start = from + pos;
        let Some(len) = xml[start..].find(&close) else {
            break;
        };
        let end = start + len + close.len();
        found.push(&xml[start..end]);
        from = end;
    }
    found
}

/// Every opening (or self-closing) `<tag ...>` element
fn open_tags<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{}", tag);
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(pos) = xml[from..].find(&open) {
        let start = from + pos;
        let Some(len) = xml[start..].find('>') else {
            break;
        };
        let end = start + len + 1;
        // Skip longer names sharing the prefix
        if xml[start + open.len()..]
            .starts_with(|c: char| c.is_whitespace() || c == '/' || c == '>')
        {
            found.push(&xml[start..end]);
        }
        from = end;
    }
    found
}

/// Trimmed text of the first `<tag>` element
fn tag_text(xml: &str, tag: &str) -> Option<String> {
    let element = open_tags(xml, tag).into_iter().next()?;
    if element.ends_with("/>") {
        return Some(String::new());
    }
    let content_start = xml.find(element)? + element.len();
    let close = format!("</{}>", tag);
    let content_end = xml[content_start..].find(&close)? + content_start;
    Some(xml[content_start..content_end].trim().to_string())
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let search = format!("{}=\"", name);
    let start = tag.find(&search)? + search.len();
    let end = tag[start..].find('"')? + start;
    Some(decode_entities(&tag[start..end]))
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the predefined XML entities and numeric character references
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest.find(';').and_then(|semi| {
            let entity = &rest[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            ch.map(|c| (c, semi + 1))
        });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=all:attention</title>
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <updated>2023-08-02T00:41:18Z</updated>
    <published>2017-06-12T17:57:34Z</published>
    <title>Attention Is All
      You Need</title>
    <summary>  The dominant sequence transduction models are based on
  complex recurrent &amp; convolutional networks.
    </summary>
    <author>
      <name>Ashish Vaswani</name>
    </author>
    <author>
      <name>Noam Shazeer</name>
      <arxiv:affiliation xmlns:arxiv="http://arxiv.org/schemas/atom">Google</arxiv:affiliation>
    </author>
    <link href="http://arxiv.org/abs/1706.03762v7" rel="alternate" type="text/html"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <published>2024-01-01T00:00:00Z</published>
    <title>Graphs &lt;and&gt; &#x201C;Things&#8221;</title>
    <summary>Short.</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_feed() {
        let papers = parse_atom_feed(FEED).unwrap();
        assert_eq!(papers.len(), 2);

        let first = &papers[0];
        assert_eq!(first.title, "Attention Is All You Need");
        assert_eq!(
            first.summary,
            "The dominant sequence transduction models are based on complex recurrent & convolutional networks."
        );
        assert_eq!(first.published, "2017-06-12T17:57:34Z");
        assert_eq!(first.link, "http://arxiv.org/abs/1706.03762v7");
        assert_eq!(first.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
        assert_eq!(first.categories, vec!["cs.CL", "cs.LG"]);
    }

    #[test]
    fn test_entities_and_missing_fields() {
        let papers = parse_atom_feed(FEED).unwrap();
        let second = &papers[1];
        assert_eq!(second.title, "Graphs <and> \u{201C}Things\u{201D}");
        assert!(second.authors.is_empty());
        assert!(second.categories.is_empty());
    }

    #[test]
    fn test_empty_feed_and_garbage() {
        let empty = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>none</title></feed>"#;
        assert!(parse_atom_feed(empty).unwrap().is_empty());
        assert!(matches!(
            parse_atom_feed("<html>down</html>"),
            Err(PaperIqError::Arxiv { .. })
        ));
    }

    #[test]
    fn test_decode_entities_leaves_unknown() {
        assert_eq!(decode_entities("a &amp;&amp; b"), "a && b");
        assert_eq!(decode_entities("AT&T &nbsp;"), "AT&T &nbsp;");
    }

    #[test]
    fn test_build_query_url() {
        let query = ArxivQuery::new("graph neural networks").with_category("cs.LG");
        let url = build_query_url(ARXIV_API_BASE, &query).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&(
            "search_query".to_string(),
            "all:graph neural networks AND cat:cs.LG".to_string()
        )));
        assert!(pairs.contains(&("max_results".to_string(), "5".to_string())));
        assert!(pairs.contains(&("sortBy".to_string(), "submittedDate".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "descending".to_string())));
    }

    #[test]
    fn test_blank_category_and_query() {
        assert!(ArxivQuery::new("x").with_category("  ").category.is_none());
        let err = build_query_url(ARXIV_API_BASE, &ArxivQuery::new("  ")).unwrap_err();
        assert!(matches!(err, PaperIqError::InvalidInput { .. }));
    }
}
