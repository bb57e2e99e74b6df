//! arXiv search command

use anyhow::Result;
use paperiq_core::papers::{ArxivClient, ArxivQuery};

use super::report::print_paper;
use crate::console::CliConsole;

pub async fn execute(
    console: &CliConsole,
    topic: &str,
    max: u32,
    category: Option<String>,
) -> Result<()> {
    let mut query = ArxivQuery::new(topic).with_max_results(max);
    if let Some(category) = category {
        query = query.with_category(category);
    }

    console.info(&format!("Searching arXiv for '{}'...", topic));
    let papers = ArxivClient::new()?.search(&query).await?;

    if papers.is_empty() {
        console.warn("No papers found for this topic.");
        return Ok(());
    }

    console.print_header(&format!("{} newest papers", papers.len()));
    for (i, paper) in papers.iter().enumerate() {
        print_paper(i + 1, paper);
    }
    println!();
    console.info("Summarize one with: paperiq summarize --topic <topic> --pick <n>");
    Ok(())
}
