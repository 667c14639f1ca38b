//! CLI adapter for sitesearch
//!
//! Exposes index building, searching and result rendering on the
//! command line. Depends on `core/`; nothing in `core/` depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitesearch - keyword search for static websites
///
/// Build a page index from a directory of HTML files, then search it
/// or render the search view's result markup.
#[derive(Parser, Debug)]
#[command(name = "sitesearch")]
#[command(version)]
#[command(about = "Static site page index and keyword search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Site root (overrides configuration)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the page index for a site
    Build(commands::BuildArgs),

    /// Search the page index
    Search(commands::SearchArgs),

    /// Render the search view's result markup for a query
    Render(commands::RenderArgs),

    /// Render results for each query line read from stdin
    Live(commands::LiveArgs),

    /// Show current configuration and feature toggles
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sitesearch completions bash > ~/.local/share/bash-completion/completions/sitesearch
    ///   zsh:   sitesearch completions zsh > ~/.zfunc/_sitesearch
    ///   fish:  sitesearch completions fish > ~/.config/fish/completions/sitesearch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.site.root = root;
    }
    config.log_config();

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &config, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &config, cli.format).await,
        Commands::Render(args) => commands::render::execute(args, &config, cli.format).await,
        Commands::Live(args) => commands::live::execute(args, &config, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
