//! Application state for the search view.
//!
//! The page index and feature toggles are loaded once, bundled into
//! an immutable [`AppState`] and then only read. Where the two
//! documents come from is abstracted by [`AssetSource`] so the view
//! can be driven from a site directory, an embedding host or a test.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::config::Config;
use crate::core::error::{Result, SiteSearchError};
use crate::core::search::SearchEngine;
use crate::core::types::{FeatureToggles, SiteIndex};

/// Source of the documents the search view loads at startup
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the raw bytes of the asset called `name`
    async fn fetch(&self, name: &str) -> Result<Vec<u8>>;
}

/// Reads assets from a site root on the local file system
#[derive(Debug, Clone)]
pub struct SiteDir {
    root: PathBuf,
}

impl SiteDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetSource for SiteDir {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                SiteSearchError::AssetNotFound(path.display().to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }
}

/// Immutable state shared by search and render operations
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search over the loaded page index
    pub engine: SearchEngine,

    /// Renderer feature toggles
    pub toggles: FeatureToggles,
}

impl AppState {
    pub fn new(index: SiteIndex, toggles: FeatureToggles) -> Self {
        Self {
            engine: SearchEngine::new(index),
            toggles,
        }
    }

    /// Load toggles and index concurrently from `source`
    ///
    /// Toggle problems fall back to defaults. Index problems are
    /// returned as [`SiteSearchError::IndexLoadFailed`].
    pub async fn load(source: &dyn AssetSource, config: &Config) -> Result<Self> {
        let (toggles, index) = tokio::join!(
            load_toggles(source, &config.site.toggles_file),
            load_index(source, &config.site.index_file),
        );
        let index = index?;

        tracing::info!("Loaded site index with {} pages", index.len());

        Ok(Self {
            engine: SearchEngine::with_max_query_length(index, config.search.max_query_length),
            toggles,
        })
    }
}

/// Load feature toggles, keeping the defaults on any failure
pub async fn load_toggles(source: &dyn AssetSource, name: &str) -> FeatureToggles {
    let bytes = match source.fetch(name).await {
        Ok(bytes) => bytes,
        Err(e) => {
            if e.is_not_found() {
                tracing::debug!("No feature toggles at {}, using defaults", name);
            } else {
                tracing::warn!("Failed to fetch feature toggles: {}", e);
            }
            return FeatureToggles::default();
        }
    };

    FeatureToggles::from_json(&bytes).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed feature toggles in {}: {}", name, e);
        FeatureToggles::default()
    })
}

/// Load the site index; any failure is fatal to the view
pub async fn load_index(source: &dyn AssetSource, name: &str) -> Result<SiteIndex> {
    let bytes = source
        .fetch(name)
        .await
        .map_err(|e| SiteSearchError::IndexLoadFailed(format!("{name}: {e}")))?;

    SiteIndex::from_json(&bytes)
        .map_err(|e| SiteSearchError::IndexLoadFailed(format!("{name}: {e}")))
}
