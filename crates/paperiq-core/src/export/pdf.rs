//! PDF export
//!
//! Letter-sized pages using the standard Helvetica fonts, so no font
//! files are embedded. Text outside WinAnsi is replaced with `?`.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::entry::SummaryEntry;
use super::text::{display_title, metadata_lines};
use crate::error::{PaperIqError, PaperIqResult};

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 40;
const MARGIN_BOTTOM: i64 = 40;
const LINE_HEIGHT: i64 = 14;
const PARAGRAPH_GAP: i64 = 8;
const WRAP_WIDTH: usize = 90;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Render an entry as a PDF document
pub fn build_pdf(entry: &SummaryEntry) -> PaperIqResult<Vec<u8>> {
    let mut layout = PageLayout::new();

    layout.line(BOLD, 14, display_title(entry));
    layout.y -= 30 - LINE_HEIGHT;

    for line in metadata_lines(entry) {
        layout.line(REGULAR, 9, &line);
    }
    layout.y -= 10;

    for paragraph in entry.summary_text.split('\n') {
        for line in wrap(paragraph, WRAP_WIDTH) {
            if layout.y < MARGIN_BOTTOM {
                layout.new_page();
            }
            layout.line(REGULAR, 10, &line);
        }
        layout.y -= PARAGRAPH_GAP;
    }

    let pages = layout.finish();
    debug!(pages = pages.len(), "laid out PDF export");
    assemble(pages)
}

pub fn write_pdf(entry: &SummaryEntry, path: &Path) -> PaperIqResult<()> {
    let bytes = build_pdf(entry)?;
    fs::write(path, bytes)
        .map_err(|e| PaperIqError::io_with_path(e.to_string(), path.display().to_string()))?;
    info!(path = %path.display(), "summary exported as PDF");
    Ok(())
}

struct PageLayout {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: i64,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - 60,
        }
    }

    fn line(&mut self, font: &str, size: i64, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), Object::Integer(size)]),
            Operation::new("Td", vec![Object::Integer(MARGIN_LEFT), Object::Integer(self.y)]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
        self.y -= LINE_HEIGHT;
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_HEIGHT - 50;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.pages.push(self.current);
        self.pages
    }
}

fn assemble(pages: Vec<Vec<Operation>>) -> PaperIqResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font("Helvetica"));
    let bold_id = doc.add_object(font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|e| PaperIqError::export(format!("Failed to encode PDF page: {}", e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PaperIqError::export(format!("Failed to write PDF: {}", e)))?;
    Ok(buffer)
}

fn font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Greedy word wrap. Whitespace runs collapse, words longer than `width`
/// are split, and a blank paragraph yields no lines.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while !chars.is_empty() {
            let room = if current_len == 0 {
                width
            } else {
                width.saturating_sub(current_len + 1)
            };
            if chars.len() <= room {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current_len += chars.len();
                current.extend(chars.drain(..));
            } else if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            } else {
                current.extend(chars.drain(..width));
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{SourceMode, SummaryMetadata};

    fn entry(title: &str, body: &str) -> SummaryEntry {
        let meta = SummaryMetadata::new(SourceMode::SearchTopic).with_topic("graph networks");
        SummaryEntry::new(title, body, "input", meta)
    }

    fn page_text(bytes: &[u8], page: u32) -> Vec<u8> {
        let doc = Document::load_mem(bytes).unwrap();
        let page_id = doc.get_pages()[&page];
        doc.get_page_content(page_id).unwrap()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_build_pdf_single_page() {
        let bytes = build_pdf(&entry("Graph Networks", "A short body.")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        let content = page_text(&bytes, 1);
        assert!(contains(&content, b"Graph Networks"));
        assert!(contains(&content, b"Topic: graph networks"));
        assert!(contains(&content, b"A short body."));
    }

    #[test]
    fn test_empty_title_uses_default() {
        let bytes = build_pdf(&entry("  ", "Body")).unwrap();
        assert!(contains(&page_text(&bytes, 1), b"AI PaperIQ Summary"));
    }

    #[test]
    fn test_long_summary_spans_pages() {
        let body = vec!["Findings are discussed at length in this paragraph."; 120].join("\n");
        let bytes = build_pdf(&entry("Long", &body)).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
        assert!(contains(&page_text(&bytes, 2), b"Findings are discussed"));
    }

    #[test]
    fn test_wrap() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("one two  three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("ab abcdef", 4), vec!["ab", "abcd", "ef"]);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("caf\u{e9}"), b"caf\xe9".to_vec());
        assert_eq!(encode_win_ansi("\u{2022} a\u{2014}b"), b"\x95 a\x97b".to_vec());
        assert_eq!(encode_win_ansi("\u{4e2d}"), b"?".to_vec());
    }

    #[test]
    fn test_write_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.pdf");
        write_pdf(&entry("T", "B"), &path).unwrap();
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));

        let err = write_pdf(&entry("T", "B"), Path::new("/nonexistent/dir/out.pdf")).unwrap_err();
        assert!(matches!(err, PaperIqError::Io { path: Some(_), .. }));
    }
}
