//! Index build orchestration.
//!
//! Coordinates the end-to-end build:
//! 1. Index the home page (always first)
//! 2. Walk the site for every other page
//! 3. Extract metadata per page
//! 4. Write the index document atomically

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::NamedTempFile;

use crate::core::config::Config;
use crate::core::error::{Result, SiteSearchError};
use crate::core::indexer::extract::{extract_page, find_sibling_favicon};
use crate::core::indexer::walker::{relative_path, PageWalker, HOME_PAGE};
use crate::core::types::{BuildReport, PageEntry, SiteIndex};

/// Title given to the site's home page
pub const HOME_TITLE: &str = "Home";

/// Builds the site index document
pub struct IndexBuilder {
    walker: PageWalker,
    favicon_names: Vec<String>,
    index_file: String,
}

impl IndexBuilder {
    /// Create a new index builder
    ///
    /// # Arguments
    ///
    /// * `favicon_names` - Icon file names looked up next to each page
    /// * `exclude_patterns` - Glob patterns for directories to skip
    /// * `index_file` - File name of the index document
    pub fn new(
        favicon_names: Vec<String>,
        exclude_patterns: &[String],
        index_file: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            walker: PageWalker::new(exclude_patterns)?,
            favicon_names,
            index_file: index_file.into(),
        })
    }

    /// Create a builder from the application configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.indexing.favicon_names.clone(),
            &config.indexing.exclude_patterns,
            config.site.index_file.clone(),
        )?
        .with_skip_hidden(config.indexing.skip_hidden))
    }

    /// Prune hidden directories while walking
    pub fn with_skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.walker = self.walker.with_skip_hidden(skip_hidden);
        self
    }

    /// Build the index and write it under `root`
    ///
    /// Nothing is written unless every page could be read.
    pub fn build(&self, root: &Path) -> Result<BuildReport> {
        let start = Instant::now();

        tracing::info!("Building site index from {:?}", root);
        let index = self.build_index(root)?;
        let output = self.write_index(root, &index)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Index build complete: {} entries written to {:?} in {}ms",
            index.len(),
            output,
            duration_ms
        );

        Ok(BuildReport {
            output,
            entries: index.len(),
            duration_ms,
            generated_at: chrono::Utc::now(),
        })
    }

    /// Walk `root` and produce the in-memory index
    pub fn build_index(&self, root: &Path) -> Result<SiteIndex> {
        if !root.is_dir() {
            return Err(SiteSearchError::InvalidPath(format!(
                "Site root is not a directory: {}",
                root.display()
            )));
        }

        let mut pages = Vec::new();

        let home = root.join(HOME_PAGE);
        if home.is_file() {
            let mut entry = self.index_page(root, &home)?;
            entry.title = HOME_TITLE.to_string();
            pages.push(entry);
        } else {
            tracing::debug!("No home page at {:?}", home);
        }

        for page in self.walker.pages(root) {
            let page = page?;
            pages.push(self.index_page(root, &page)?);
        }

        Ok(SiteIndex::new(pages))
    }

    /// Read one page and turn it into an index entry
    fn index_page(&self, root: &Path, page: &Path) -> Result<PageEntry> {
        let bytes = fs::read(page).map_err(|e| {
            SiteSearchError::IndexBuildFailed(format!("Failed to read {page:?}: {e}"))
        })?;
        let html = String::from_utf8_lossy(&bytes);
        let rel_path = relative_path(root, page);

        let extracted = extract_page(&html, &rel_path);
        let favicon = extracted
            .favicon
            .or_else(|| find_sibling_favicon(page, &rel_path, &self.favicon_names));

        tracing::debug!(
            "Indexed {} (title: {}, favicon: {:?})",
            rel_path,
            extracted.title.is_some(),
            favicon
        );

        Ok(PageEntry {
            title: extracted.title.unwrap_or_else(|| rel_path.clone()),
            path: rel_path,
            snippet: extracted.snippet,
            favicon,
        })
    }

    /// Write the index document, replacing any previous one
    ///
    /// The document goes to a temporary file in `root` first and is
    /// moved into place only once fully written.
    pub fn write_index(&self, root: &Path, index: &SiteIndex) -> Result<PathBuf> {
        let output = root.join(&self.index_file);
        let json = index.to_json()?;

        let mut temp = NamedTempFile::new_in(root)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&output).map_err(|e| {
            SiteSearchError::IndexBuildFailed(format!("Failed to write {output:?}: {}", e.error))
        })?;

        Ok(output)
    }
}
