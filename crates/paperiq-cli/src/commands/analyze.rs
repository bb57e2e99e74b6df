//! Standalone analysis of an existing summary

use anyhow::{Context, Result};
use paperiq_core::analysis::analyze_texts;
use std::fs;
use std::path::Path;

use super::report::print_analysis;
use crate::console::CliConsole;

pub fn execute(console: &CliConsole, input: &Path, summary: &Path, json: bool) -> Result<()> {
    let input_text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;
    let summary_text = fs::read_to_string(summary)
        .with_context(|| format!("Failed to read summary file {}", summary.display()))?;

    let analysis = analyze_texts(&input_text, &summary_text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(console, &analysis);
    }
    Ok(())
}
