//! Summarize command: load input, generate, analyze, cite and export

use anyhow::{Context, Result, bail};
use colored::*;
use paperiq_core::analysis::analyze_texts;
use paperiq_core::export::{
    SourceMode, SummaryEntry, SummaryMetadata, build_citation, write_json, write_pdf, write_txt,
};
use paperiq_core::llm::{Completion, LlmProvider};
use paperiq_core::papers::{ArxivClient, ArxivQuery, extract_text_from_path};
use paperiq_core::summarize::Summarizer;
use std::fs;
use tracing::info;

use super::build_client;
use super::report::{print_analysis, print_citation, print_paper};
use crate::args::{SourceArgs, SummarizeArgs};
use crate::console::CliConsole;

/// Title for summaries of user-provided content
const CUSTOM_INPUT_TITLE: &str = "Custom Input Summary";

/// Number of results fetched for `--topic`, unless `--pick` asks for more
const TOPIC_RESULTS: u32 = 5;

/// Content to summarize plus where it came from
#[derive(Debug)]
struct LoadedInput {
    content: String,
    title: String,
    metadata: SummaryMetadata,
}

pub async fn execute(
    console: &CliConsole,
    provider: Option<LlmProvider>,
    args: SummarizeArgs,
) -> Result<()> {
    ensure_topic_flags(&args)?;
    // Fail on missing credentials before any network or PDF work
    let summarizer = Summarizer::new(build_client(provider)?);

    let input = load_input(console, &args).await?;
    if input.content.trim().is_empty() {
        bail!("The input contains no text to summarize");
    }

    console.info(&format!(
        "Summarizing {} characters with {}...",
        input.content.chars().count(),
        summarizer.client().provider()
    ));
    let completion = summarizer
        .summarize(&input.content, args.model)
        .await
        .context("Summarization failed")?;

    let summary = match completion {
        Completion::Text(text) => text,
        other => {
            console.warn(other.notice().unwrap_or("No summary was produced"));
            return Ok(());
        }
    };

    console.print_header(&input.title);
    println!("{}", summary);

    let mut entry = SummaryEntry::new(input.title, summary, input.content, input.metadata);
    if !args.no_analysis {
        let analysis = analyze_texts(&entry.input_text, &entry.summary_text);
        print_analysis(console, &analysis);
        entry = entry.with_analysis(analysis);
    }

    if let Some(citation) = build_citation(&entry) {
        print_citation(console, &citation);
    }

    if let Some(path) = &args.export_txt {
        write_txt(&entry, path)?;
        console.success(&format!("Saved text summary to {}", path.display()));
    }
    if let Some(path) = &args.export_json {
        write_json(&entry, path)?;
        console.success(&format!("Saved JSON summary to {}", path.display()));
    }
    if let Some(path) = &args.export_pdf {
        write_pdf(&entry, path)?;
        console.success(&format!("Saved PDF summary to {}", path.display()));
    }
    Ok(())
}

async fn load_input(console: &CliConsole, args: &SummarizeArgs) -> Result<LoadedInput> {
    let source = &args.source;

    if let Some(topic) = &source.topic {
        return load_topic(console, topic, args).await;
    }

    if let Some(path) = &source.pdf {
        let path = path.clone();
        console.info(&format!("Extracting text from {}...", path.display()));
        let content = tokio::task::spawn_blocking(move || extract_text_from_path(&path))
            .await
            .context("PDF extraction task failed")??;
        console.success(&format!(
            "Extracted {} characters from PDF.",
            content.chars().count()
        ));
        return Ok(custom_input(content, SourceMode::UploadPdf));
    }

    Ok(custom_input(read_text_source(source)?, SourceMode::PasteText))
}

/// `--category`, `--pick` and `--notes` only make sense with `--topic`
fn ensure_topic_flags(args: &SummarizeArgs) -> Result<()> {
    if args.source.topic.is_some() {
        return Ok(());
    }
    let stray: Vec<&str> = [
        ("--category", args.category.is_some()),
        ("--pick", args.pick != 1),
        ("--notes", args.notes.is_some()),
    ]
    .into_iter()
    .filter_map(|(flag, given)| given.then_some(flag))
    .collect();
    if !stray.is_empty() {
        bail!("{} can only be used with --topic", stray.join(", "));
    }
    Ok(())
}

fn custom_input(content: String, mode: SourceMode) -> LoadedInput {
    LoadedInput {
        content,
        title: CUSTOM_INPUT_TITLE.to_string(),
        metadata: SummaryMetadata::new(mode),
    }
}

/// `--text` or `--file` content
fn read_text_source(source: &SourceArgs) -> Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    bail!("No input given: use --text, --file, --pdf or --topic")
}

async fn load_topic(console: &CliConsole, topic: &str, args: &SummarizeArgs) -> Result<LoadedInput> {
    if args.pick == 0 {
        bail!("--pick starts at 1");
    }

    console.info(&format!("Searching arXiv for '{}'...", topic));
    let mut query =
        ArxivQuery::new(topic).with_max_results(TOPIC_RESULTS.max(args.pick as u32));
    if let Some(category) = &args.category {
        query = query.with_category(category.clone());
    }

    let papers = ArxivClient::new()?
        .search(&query)
        .await
        .context("arXiv search failed")?;
    let Some(paper) = papers.into_iter().nth(args.pick - 1) else {
        bail!("No papers found for this topic (wanted result #{})", args.pick);
    };

    print_paper(args.pick, &paper);
    println!("{}", "-".repeat(50).dimmed());
    info!(link = %paper.link, "summarizing arXiv paper");

    let metadata = SummaryMetadata::new(SourceMode::SearchTopic)
        .with_topic(topic)
        .with_paper(&paper);

    Ok(LoadedInput {
        content: compose_content(&paper.summary, args.notes.as_deref()),
        title: paper.title,
        metadata,
    })
}

/// Abstract followed by the user's notes, when given
fn compose_content(abstract_text: &str, notes: Option<&str>) -> String {
    match notes.map(str::trim).filter(|n| !n.is_empty()) {
        Some(notes) => format!("{}\n\nUser Notes:\n{}", abstract_text, notes),
        None => abstract_text.to_string(),
    }
}
