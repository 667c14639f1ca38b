//! Core data types for sitesearch.
//!
//! Defines the page index records produced by the builder, the
//! feature toggles consumed by the renderer, and the build report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Searchable metadata for one published page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Display name (`<title>` text or the relative path)
    pub title: String,

    /// Forward-slash path relative to the site root
    pub path: String,

    /// Short description, possibly empty
    pub snippet: String,

    /// Icon reference (absolute URL or root-relative path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl PageEntry {
    /// Favicon reference if present and not blank
    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// Ordered collection of every indexed page, home page first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteIndex {
    pages: Vec<PageEntry>,
}

impl SiteIndex {
    pub fn new(pages: Vec<PageEntry>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parse an index document
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Serialize as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<PageEntry>> for SiteIndex {
    fn from(pages: Vec<PageEntry>) -> Self {
        Self::new(pages)
    }
}

/// Renderer feature toggles
///
/// Every key is optional in the toggle document; missing keys keep
/// their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureToggles {
    pub show_title: bool,
    pub show_snippet: bool,
    pub show_path: bool,
    pub show_favicon: bool,

    /// Icon used when a page has none or its icon fails to load
    pub default_favicon: String,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            show_title: true,
            show_snippet: true,
            show_path: true,
            show_favicon: true,
            default_favicon: "favicon.ico".to_string(),
        }
    }
}

impl FeatureToggles {
    /// Merge a toggle document over the defaults
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Summary of one index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Where the index document was written
    pub output: PathBuf,

    /// Number of entries in the index
    pub entries: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,

    /// Completion time (RFC 3339)
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
