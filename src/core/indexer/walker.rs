//! Site walker yielding published HTML pages.
//!
//! Traverses the site root depth-first in file-name order so that
//! repeated builds over the same tree produce the same index. Symbolic
//! links are followed. Unlike a best-effort crawl, any walk error
//! (including a link loop) is returned to the caller: a partially
//! walked site must never become an index.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SiteSearchError};

/// File name of the designated home page at the site root
pub const HOME_PAGE: &str = "index.html";

/// Walks a site root and yields every page except the home page
pub struct PageWalker {
    /// Directory patterns to prune (matched against root-relative paths)
    exclude_patterns: Vec<Pattern>,
    /// Prune directories whose name starts with `.`
    skip_hidden: bool,
}

impl PageWalker {
    /// Create a new page walker
    ///
    /// # Arguments
    ///
    /// * `exclude_patterns` - Glob patterns for directories to skip
    ///
    /// # Returns
    ///
    /// A new `PageWalker` or an error if a pattern is invalid
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let exclude = exclude_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    SiteSearchError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exclude_patterns: exclude,
            skip_hidden: false,
        })
    }

    /// Also prune hidden directories (off by default)
    pub fn with_skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.skip_hidden = skip_hidden;
        self
    }

    /// Iterate over page paths under `root` in deterministic order
    ///
    /// The top-level `index.html` is skipped; it is indexed
    /// separately so it always comes first.
    pub fn pages<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.should_process_entry(e, root))
            .filter_map(|entry| match entry {
                Ok(entry) if is_page(&entry) && !is_home_page(&entry) => {
                    Some(Ok(entry.into_path()))
                }
                Ok(_) => None,
                Err(e) => Some(Err(SiteSearchError::from(e))),
            })
    }

    /// Collect all page paths, failing on the first walk error
    pub fn collect_pages(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.pages(root).collect()
    }

    /// Filters out excluded (and, if enabled, hidden) directories.
    /// Never filters the root itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root || !entry.file_type().is_dir() {
            return true;
        }

        if self.skip_hidden {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    tracing::debug!("Skipping hidden directory: {:?}", path);
                    return false;
                }
            }
        }

        let relative = relative_path(root, path);
        for pattern in &self.exclude_patterns {
            if pattern.matches(&relative) {
                tracing::debug!("Skipping excluded directory: {:?}", path);
                return false;
            }
        }

        true
    }
}

fn is_page(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.path().extension().and_then(|e| e.to_str()) == Some("html")
}

fn is_home_page(entry: &DirEntry) -> bool {
    entry.depth() == 1 && entry.file_name() == HOME_PAGE
}

/// Express `path` relative to `root` with forward slashes
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
