//! Core domain logic
//!
//! Everything here is independent of the command-line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Page index and feature toggle data structures
//! - **indexer**: Site walking, metadata extraction, index writing
//! - **search**: Query compilation, filtering and highlighting
//! - **state**: Startup loading of the immutable view state
//! - **render**: Result markup and the query lifecycle

pub mod config;
pub mod error;
pub mod indexer;
pub mod render;
pub mod search;
pub mod state;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiteSearchError};
pub use state::AppState;
