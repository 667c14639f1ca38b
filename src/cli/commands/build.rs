//! Build command - generate the site's page index

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexBuilder;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Site root to index (defaults to the configured root)
    pub path: Option<PathBuf>,

    /// Directory patterns to skip (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Skip directories whose name starts with '.'
    #[arg(long)]
    pub skip_hidden: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub root: String,
    pub output: String,
    pub entries: usize,
    pub duration_secs: f64,
    pub generated_at: String,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args.path.unwrap_or_else(|| config.site.root.clone());

    let root = root.canonicalize().map_err(|e| {
        format!(
            "Invalid site root '{}': {}. Make sure the directory exists and is accessible.",
            root.display(),
            e
        )
    })?;

    if !root.is_dir() {
        return Err(format!("Site root '{}' is not a directory.", root.display()).into());
    }

    let mut exclude_patterns = config.indexing.exclude_patterns.clone();
    exclude_patterns.extend(args.exclude);

    let builder = IndexBuilder::new(
        config.indexing.favicon_names.clone(),
        &exclude_patterns,
        config.site.index_file.clone(),
    )?
    .with_skip_hidden(args.skip_hidden || config.indexing.skip_hidden);

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing pages under {}...",
            colors::file_path(&root.display().to_string())
        );
    }

    let report = builder.build(&root)?;

    let response = BuildResponse {
        root: root.to_string_lossy().into_owned(),
        output: report.output.to_string_lossy().into_owned(),
        entries: report.entries,
        duration_secs: report.duration_ms as f64 / 1000.0,
        generated_at: report.generated_at.to_rfc3339(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} with {} entries.",
                colors::success("Generated"),
                colors::file_path(&response.output),
                colors::number(&response.entries.to_string())
            );
            if !args.quiet {
                println!(
                    "Took {}",
                    colors::number(&format_duration(response.duration_secs))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
