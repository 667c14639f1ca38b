//! sitesearch CLI - build and search static site page indexes
//!
//! # Examples
//!
//! ```bash
//! # Build public/siteIndex.json
//! sitesearch build public
//!
//! # Search the index
//! sitesearch --root public search "about"
//!
//! # Print the search view's markup for a query
//! sitesearch --root public render "about"
//!
//! # Feed queries line by line
//! printf 'ab\nabout\n' | sitesearch --root public live
//! ```

use clap::Parser;
use sitesearch::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitesearch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
