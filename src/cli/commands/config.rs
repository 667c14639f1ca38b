//! Config command - show current configuration

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::state::{load_toggles, SiteDir};
use crate::core::types::FeatureToggles;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Skip reading the site's feature toggle document
    #[arg(long)]
    pub no_toggles: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggles: Option<FeatureToggles>,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let toggles = if args.no_toggles {
        None
    } else {
        let source = SiteDir::new(&config.site.root);
        Some(load_toggles(&source, &config.site.toggles_file).await)
    };

    let response = ConfigResponse {
        config: config.clone(),
        toggles,
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  site:");
            println!("    root: {}", response.config.site.root.display());
            println!("    index_file: {}", response.config.site.index_file);
            println!("    toggles_file: {}", response.config.site.toggles_file);
            println!("    index path: {}", response.config.index_path().display());
            println!("    toggles path: {}", response.config.toggles_path().display());
            println!("  indexing:");
            println!(
                "    favicon_names: {:?}",
                response.config.indexing.favicon_names
            );
            println!(
                "    exclude_patterns: {:?}",
                response.config.indexing.exclude_patterns
            );
            println!("    skip_hidden: {}", response.config.indexing.skip_hidden);
            println!("  search:");
            println!(
                "    max_query_length: {}",
                response.config.search.max_query_length
            );
            if let Some(toggles) = &response.toggles {
                print_header("Feature toggles:");
                println!("  showTitle: {}", toggles.show_title);
                println!("  showSnippet: {}", toggles.show_snippet);
                println!("  showPath: {}", toggles.show_path);
                println!("  showFavicon: {}", toggles.show_favicon);
                println!("  defaultFavicon: {}", toggles.default_favicon);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
