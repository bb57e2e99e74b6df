//! PaperIQ CLI application
//!
//! Summarize research papers from pasted text, files, PDFs or arXiv topics,
//! then inspect how the summary compares to its source.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/paperiq-cli
//! ```
//!
//! # Commands
//!
//! - `paperiq summarize --topic "graph neural networks"`: fetch the newest arXiv
//!   paper and summarize its abstract
//! - `paperiq summarize --pdf paper.pdf --export-txt summary.txt`
//! - `paperiq search "diffusion models" --category cs.CV`
//! - `paperiq chat "What is RLHF?"`
//! - `paperiq analyze --input paper.txt --summary summary.txt`
//! - `paperiq models`, `paperiq ping`
//!
//! API keys are read from `GOOGLE_API_KEY` / `GROQ_API_KEY`, also from a
//! `.env` file in the working directory.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use paperiq_core::config::default_provider;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::console::CliConsole;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins; --verbose turns on debug output for PaperIQ crates
    let default_filter = if cli.verbose {
        "paperiq_core=debug,paperiq_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let verbose = cli.verbose;
    let console_url = cli
        .provider
        .or_else(|| default_provider().ok())
        .map(|provider| provider.console_url());

    if let Err(err) = router::route(cli).await {
        let console = CliConsole::new(verbose);
        console.error(&format!("{:#}", err));
        for hint in commands::error_hints(&err, console_url) {
            console.hint(&hint);
        }
        std::process::exit(1);
    }
}
