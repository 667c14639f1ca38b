//! Search command - filter the page index by a query

use crate::cli::output::{colors, highlight_terminal, truncate};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::render::markup::PROMPT_HTML;
use crate::core::state::{load_index, SiteDir};
use crate::core::search::SearchEngine;
use crate::core::types::PageEntry;
use clap::Args;
use serde::Serialize;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive pattern; invalid syntax matches literally)
    pub query: String,

    /// Maximum number of results to print (0 = all)
    #[arg(long, short = 'k', default_value = "0")]
    pub limit: usize,

    /// Only show page paths
    #[arg(long)]
    pub paths_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub literal: bool,
    pub total_results: usize,
    pub results: Vec<PageEntry>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = SiteDir::new(&config.site.root);
    let index = load_index(&source, &config.site.index_file).await.map_err(|e| {
        format!("{e}. Run 'sitesearch build' to generate the index first.")
    })?;

    let engine = SearchEngine::with_max_query_length(index, config.search.max_query_length);
    let pattern = engine.compile(&args.query);
    let matches = engine.search(&args.query);
    let total_results = matches.len();

    let shown: Vec<PageEntry> = matches
        .into_iter()
        .take(if args.limit == 0 { usize::MAX } else { args.limit })
        .cloned()
        .collect();

    let output = SearchResponseOutput {
        query: args.query.clone(),
        literal: pattern.is_literal(),
        total_results,
        results: shown,
    };

    match format {
        OutputFormat::Human => {
            if args.query.trim().is_empty() {
                println!("{}", colors::dim(strip_tags(PROMPT_HTML)));
            } else if output.results.is_empty() {
                println!("No results found for \"{}\"", colors::label(&args.query));
            } else {
                println!(
                    "Found {} page(s) for \"{}\"{}:\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&args.query),
                    if output.literal { " (literal)" } else { "" }
                );

                for (i, page) in output.results.iter().enumerate() {
                    if args.paths_only {
                        println!("{}", colors::file_path(&page.path));
                        continue;
                    }
                    println!(
                        "[{}] {}",
                        colors::rank(&(i + 1).to_string()),
                        highlight_terminal(&pattern, &page.title)
                    );
                    println!("    {}", colors::file_path(&page.path));
                    if !page.snippet.is_empty() {
                        let snippet = truncate(&page.snippet.replace('\n', " "), 100);
                        println!("    {}", highlight_terminal(&pattern, &snippet));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Drop HTML tags from one of the fixed view messages
fn strip_tags(html: &str) -> &str {
    html.trim_start_matches("<em>").trim_end_matches("</em>")
}
