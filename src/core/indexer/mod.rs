//! Site index building.
//!
//! Turns a directory tree of published HTML pages into the index
//! document the search view loads. Key features:
//!
//! - Deterministic depth-first traversal (file-name order)
//! - Forgiving regex extraction of title, snippet and favicon
//! - Atomic replacement of the index document
//!
//! # Failure model
//!
//! Markup problems inside a page only cost that page some metadata.
//! File-system problems abort the whole build before anything is
//! written.

pub mod builder;
pub mod extract;
pub mod walker;

pub use builder::IndexBuilder;
pub use extract::{extract_page, ExtractedPage};
pub use walker::PageWalker;
