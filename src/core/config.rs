//! Configuration management for sitesearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//!
//! Renderer feature toggles are *not* part of this configuration:
//! they live in the site's own toggle document next to the index
//! (see [`crate::core::types::FeatureToggles`]).

use crate::core::error::{Result, SiteSearchError};
use crate::core::search::MAX_QUERY_LENGTH_LIMIT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Site layout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Root directory of the published site
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File name of the index document under the site root
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// File name of the feature toggle document under the site root
    #[serde(default = "default_toggles_file")]
    pub toggles_file: String,
}

/// Index builder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Conventional icon names looked up next to each page, in order
    #[serde(default = "default_favicon_names")]
    pub favicon_names: Vec<String>,

    /// Directories to skip (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Skip directories whose name starts with `.`
    #[serde(default)]
    pub skip_hidden: bool,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Queries are clipped to this many characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_index_file() -> String {
    "siteIndex.json".to_string()
}

fn default_toggles_file() -> String {
    "featureToggles.json".to_string()
}

fn default_favicon_names() -> Vec<String> {
    vec![
        "favicon.ico".to_string(),
        "favicon.png".to_string(),
        "favicon.svg".to_string(),
    ]
}

fn default_max_query_length() -> usize {
    500
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index_file: default_index_file(),
            toggles_file: default_toggles_file(),
        }
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            favicon_names: default_favicon_names(),
            exclude_patterns: Vec::new(),
            skip_hidden: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SiteSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Location of the per-user config file
    pub fn user_config_file() -> Option<PathBuf> {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("sitesearch").join("config.toml"));
        }
        dirs::config_dir().map(|dir| dir.join("sitesearch").join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. SITESEARCH_CONFIG env var
    /// 2. ./sitesearch.toml
    /// 3. user config file (~/.config/sitesearch/config.toml)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SITESEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("sitesearch.toml").exists() {
            Self::from_file("sitesearch.toml")?
        } else {
            match Self::user_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Self::default(),
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("SITESEARCH_ROOT") {
            self.site.root = PathBuf::from(root);
        }
        if let Ok(index_file) = env::var("SITESEARCH_INDEX_FILE") {
            self.site.index_file = index_file;
        }
        if let Ok(toggles_file) = env::var("SITESEARCH_TOGGLES_FILE") {
            self.site.toggles_file = toggles_file;
        }
        if let Ok(max_len) = env::var("SITESEARCH_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("index_file", &self.site.index_file),
            ("toggles_file", &self.site.toggles_file),
        ] {
            if value.trim().is_empty() {
                return Err(SiteSearchError::ConfigError(format!(
                    "{name} must not be empty"
                )));
            }
            if value.contains('/') || value.contains('\\') {
                return Err(SiteSearchError::ConfigError(format!(
                    "{name} must be a plain file name, got '{value}'"
                )));
            }
        }

        if self.indexing.favicon_names.is_empty() {
            return Err(SiteSearchError::ConfigError(
                "At least one favicon name is required".to_string(),
            ));
        }

        for pattern in &self.indexing.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                SiteSearchError::ConfigError(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }

        if self.search.max_query_length == 0 {
            return Err(SiteSearchError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length > MAX_QUERY_LENGTH_LIMIT {
            return Err(SiteSearchError::ConfigError(format!(
                "Max query length must be at most {MAX_QUERY_LENGTH_LIMIT}, got {}",
                self.search.max_query_length
            )));
        }

        Ok(())
    }

    /// Path of the index document
    pub fn index_path(&self) -> PathBuf {
        self.site.root.join(&self.site.index_file)
    }

    /// Path of the feature toggle document
    pub fn toggles_path(&self) -> PathBuf {
        self.site.root.join(&self.site.toggles_file)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site root: {:?}", self.site.root);
        tracing::info!("  Index file: {}", self.site.index_file);
        tracing::info!("  Toggles file: {}", self.site.toggles_file);
        tracing::info!("  Favicon names: {:?}", self.indexing.favicon_names);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Skip hidden directories: {}", self.indexing.skip_hidden);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}
