//! Linear-scan search over the page index.
//!
//! No ranking: results keep the index order, and a page matches when
//! the query pattern matches its title, path or snippet.

use crate::core::search::highlight::{escape_html, highlight_with};
use crate::core::search::pattern::QueryPattern;
use crate::core::types::{PageEntry, SiteIndex};

/// Default clip length for queries
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 500;

/// Largest accepted clip length for queries
pub const MAX_QUERY_LENGTH_LIMIT: usize = 4_096;

/// Read-only search over a loaded site index
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: SiteIndex,
    max_query_length: usize,
}

impl SearchEngine {
    /// Create a search engine over `index`
    pub fn new(index: SiteIndex) -> Self {
        Self::with_max_query_length(index, DEFAULT_MAX_QUERY_LENGTH)
    }

    /// Create a search engine that clips queries to `max_query_length` characters
    ///
    /// The length is clamped to `1..=MAX_QUERY_LENGTH_LIMIT`.
    pub fn with_max_query_length(index: SiteIndex, max_query_length: usize) -> Self {
        Self {
            index,
            max_query_length: max_query_length.clamp(1, MAX_QUERY_LENGTH_LIMIT),
        }
    }

    pub fn index(&self) -> &SiteIndex {
        &self.index
    }

    /// Compile `query` the way `search` and `highlight` do
    pub fn compile(&self, query: &str) -> QueryPattern {
        QueryPattern::compile_clipped(query, self.max_query_length)
    }

    /// Pages whose title, path or snippet match `query`, in index order
    ///
    /// A blank query returns no pages.
    pub fn search(&self, query: &str) -> Vec<&PageEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = self.compile(query);
        self.index
            .pages()
            .iter()
            .filter(|page| page_matches(&pattern, page))
            .collect()
    }

    /// Escape `text` and mark every match of `query`
    pub fn highlight(&self, text: &str, query: &str) -> String {
        if query.trim().is_empty() {
            return escape_html(text);
        }
        highlight_with(&self.compile(query), text)
    }
}

/// Whether `pattern` matches any searchable field of `page`
pub fn page_matches(pattern: &QueryPattern, page: &PageEntry) -> bool {
    pattern.is_match(&page.title) || pattern.is_match(&page.path) || pattern.is_match(&page.snippet)
}
