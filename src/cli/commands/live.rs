//! Live command - drive the search view from stdin
//!
//! Every line read is treated as the new content of the search box
//! (one input-change event), and the re-rendered markup is written
//! out immediately.

use crate::cli::output::print_error;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::render::SearchView;
use crate::core::state::SiteDir;
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Arguments for the live command
#[derive(Args, Debug)]
pub struct LiveArgs {
    /// Query already present in the search box
    #[arg(long, default_value = "")]
    pub initial: String,
}

/// One rendered frame
#[derive(Debug, Serialize)]
pub struct LiveFrame<'a> {
    pub query: &'a str,
    pub html: &'a str,
}

/// Execute the live command on stdin/stdout
pub async fn execute(
    args: LiveArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with(args, config, format, stdin.lock(), stdout.lock()).await
}

/// Execute the live command over arbitrary input and output
pub async fn execute_with<R: BufRead, W: Write>(
    args: LiveArgs,
    config: &Config,
    format: OutputFormat,
    input: R,
    mut output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = SiteDir::new(&config.site.root);
    let mut view = SearchView::initialize(&source, config, &args.initial, String::new()).await;

    write_frame(&mut output, format, view.query(), view.surface())?;

    if !view.is_ready() {
        print_error("Search view could not load its index; input is ignored");
        return Err(format!("Failed to load {}", config.site.index_file).into());
    }

    for line in input.lines() {
        let line = line?;
        view.on_input(&line);
        write_frame(&mut output, format, view.query(), view.surface())?;
    }

    Ok(())
}

fn write_frame<W: Write>(
    output: &mut W,
    format: OutputFormat,
    query: &str,
    html: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => writeln!(output, "{html}")?,
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string(&LiveFrame { query, html })?)?
        }
    }
    output.flush()?;
    Ok(())
}
