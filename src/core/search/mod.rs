//! Search module for pattern-based page filtering.
//!
//! Queries are compiled into case-insensitive regular expressions
//! with a literal-string fallback, then matched against every page's
//! title, path and snippet. Matches can be highlighted as HTML.

mod engine;
mod highlight;
mod pattern;

pub use engine::{page_matches, SearchEngine, DEFAULT_MAX_QUERY_LENGTH, MAX_QUERY_LENGTH_LIMIT};
pub use highlight::{escape_html, highlight_with};
pub use pattern::{clip_query, escape_literal, QueryPattern};
