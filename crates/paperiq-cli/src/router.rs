//! Command routing logic for CLI

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<()> {
    let provider = cli.provider;
    let console = CliConsole::new(cli.verbose);
    match cli.command {
        Commands::Summarize(args) => commands::summarize::execute(&console, provider, args).await,
        Commands::Search {
            topic,
            max,
            category,
        } => commands::search::execute(&console, &topic, max, category).await,
        Commands::Chat {
            message,
            model,
            assistant,
        } => commands::chat::execute(&console, provider, &message, model, assistant).await,
        Commands::Analyze {
            input,
            summary,
            json,
        } => commands::analyze::execute(&console, &input, &summary, json),
        Commands::Models => commands::models::execute(&console, provider).await,
        Commands::Ping => commands::ping::execute(&console, provider).await,
    }
}
