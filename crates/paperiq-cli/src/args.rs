//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use paperiq_core::llm::{LlmProvider, ModelPreference};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paperiq")]
#[command(about = "PaperIQ - AI research paper summarization and analysis")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// LLM provider: gemini or groq (default: PAPERIQ_PROVIDER, else whichever key is set)
    #[arg(long, global = true)]
    pub provider: Option<LlmProvider>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a structured summary
    Summarize(SummarizeArgs),

    /// Search arXiv for the newest papers on a topic
    Search {
        /// Topic keywords
        topic: String,

        /// Number of papers to show
        #[arg(long, default_value_t = 5)]
        max: u32,

        /// arXiv category filter, e.g. cs.LG
        #[arg(long)]
        category: Option<String>,
    },

    /// Ask a technical question
    Chat {
        message: String,

        /// Model preference: auto, pro or flash
        #[arg(long, default_value = "flash")]
        model: ModelPreference,

        /// Answer as the in-app assistant (short replies, local tips)
        #[arg(long)]
        assistant: bool,
    },

    /// Compare a summary against its source text
    Analyze {
        /// Source text file
        #[arg(long)]
        input: PathBuf,

        /// Summary text file
        #[arg(long)]
        summary: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// List models available to the configured API key
    Models,

    /// Check the API key and connectivity
    Ping,
}

/// Exactly one input source
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Text to summarize
    #[arg(long)]
    pub text: Option<String>,

    /// Plain text file to summarize
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// PDF file to summarize
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Fetch the newest arXiv paper on this topic and summarize its abstract
    #[arg(long)]
    pub topic: Option<String>,
}

/// Sources that `--category`, `--pick` and `--notes` cannot be combined with
const NOT_TOPIC: [&str; 3] = ["text", "file", "pdf"];

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// arXiv category filter for --topic
    #[arg(long, conflicts_with_all = NOT_TOPIC)]
    pub category: Option<String>,

    /// Which search result to summarize (1 = newest)
    #[arg(long, default_value_t = 1, conflicts_with_all = NOT_TOPIC)]
    pub pick: usize,

    /// Notes appended to the abstract
    #[arg(long, conflicts_with_all = NOT_TOPIC)]
    pub notes: Option<String>,

    /// Model preference: auto, pro or flash
    #[arg(long, default_value = "auto")]
    pub model: ModelPreference,

    /// Skip the summary analysis
    #[arg(long)]
    pub no_analysis: bool,

    /// Write the summary as plain text
    #[arg(long)]
    pub export_txt: Option<PathBuf>,

    /// Write the summary entry as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Write the summary as a PDF document
    #[arg(long)]
    pub export_pdf: Option<PathBuf>,
}
