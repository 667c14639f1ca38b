//! Render command - print the search view's markup for a query

use crate::cli::output::print_warning;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::render::SearchView;
use crate::core::state::SiteDir;
use clap::Args;
use serde::Serialize;

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Query already present in the search box (may be empty)
    #[arg(default_value = "")]
    pub query: String,
}

/// Render response
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub query: String,
    pub ready: bool,
    pub html: String,
}

/// Execute the render command
///
/// The markup is printed even when the index fails to load, since the
/// error message is part of the view's output; the command still exits
/// with an error in that case.
pub async fn execute(
    args: RenderArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = SiteDir::new(&config.site.root);
    let view = SearchView::initialize(&source, config, &args.query, String::new()).await;
    let ready = view.is_ready();

    let response = RenderResponse {
        query: args.query,
        ready,
        html: view.into_surface(),
    };

    match format {
        OutputFormat::Human => println!("{}", response.html),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    if !ready {
        print_warning("Search view could not load its index");
        return Err(format!(
            "Failed to load {} from {}",
            config.site.index_file,
            config.site.root.display()
        )
        .into());
    }

    Ok(())
}
