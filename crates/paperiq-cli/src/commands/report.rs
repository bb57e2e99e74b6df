//! Shared output formatting for analysis, citations and papers

use colored::*;
use paperiq_core::analysis::TextAnalysis;
use paperiq_core::export::Citation;
use paperiq_core::papers::ArxivPaper;
use paperiq_core::utils::truncate_chars;

use crate::console::CliConsole;

const ABSTRACT_PREVIEW_CHARS: usize = 300;

pub fn print_analysis(console: &CliConsole, analysis: &TextAnalysis) {
    console.print_header("Analysis");
    console.field(
        "Words",
        &format!(
            "{} input / {} summary",
            analysis.input_word_count, analysis.summary_word_count
        ),
    );
    console.field(
        "Sentences",
        &format!(
            "{} input / {} summary",
            analysis.input_sentence_count, analysis.summary_sentence_count
        ),
    );
    console.field("Compression ratio", &analysis.compression_ratio.to_string());
    console.field("Cosine similarity", &analysis.cosine_similarity.to_string());
    console.field("Keyword overlap", &analysis.keyword_overlap.to_string());
    console.field(
        "Flesch reading ease",
        &format!(
            "{} input / {} summary",
            analysis.flesch_input, analysis.flesch_summary
        ),
    );
    console.field("Top input keywords", &analysis.top_keywords_input.join(", "));
    console.field("Top summary keywords", &analysis.top_keywords_summary.join(", "));

    let common = analysis.common_keywords();
    if common.is_empty() {
        console.field("Common keywords", &"none".dimmed().to_string());
    } else {
        console.field("Common keywords", &common.join(", ").green().to_string());
    }
}

pub fn print_citation(console: &CliConsole, citation: &Citation) {
    console.print_header("Citation");
    println!("{}", "APA".bold());
    println!("{}", citation.apa);
    println!();
    println!("{}", "BibTeX".bold());
    println!("{}", citation.bibtex);
}

pub fn print_paper(index: usize, paper: &ArxivPaper) {
    println!();
    println!("{} {}", format!("[{}]", index).cyan().bold(), paper.title.bold());
    if !paper.authors.is_empty() {
        println!("    {}", paper.authors.join(", "));
    }
    let published = paper.published.get(..10).unwrap_or(paper.published.as_str());
    println!(
        "    {} {}  {}",
        published.dimmed(),
        paper.categories.join(" ").magenta(),
        paper.link.blue()
    );

    let preview = truncate_chars(&paper.summary, ABSTRACT_PREVIEW_CHARS);
    if preview.len() < paper.summary.len() {
        println!("    {}...", preview);
    } else {
        println!("    {}", preview);
    }
}
