//! sitesearch - keyword search for statically generated websites
//!
//! A build step scans a site's HTML pages into a small JSON index;
//! a search view loads that index once and filters pages against a
//! query on every keystroke, rendering highlighted, markup-safe
//! results.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types
//!   - indexer (site walking, metadata extraction)
//!   - search (pattern compilation, filtering, highlighting)
//!   - state, render (search view)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Features
//!
//! - Case-insensitive pattern queries that never fail on bad syntax
//! - Order-preserving filtering, no ranking
//! - Every rendered field HTML-escaped, matches wrapped in `<mark>`
//! - Atomic index writes

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SiteSearchError};
pub use core::search::SearchEngine;
pub use core::state::AppState;
pub use core::types::*;
