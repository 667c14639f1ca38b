//! Error types and error handling for sitesearch.
//!
//! This module defines the error types used throughout the
//! application. Recoverable conditions (malformed queries, missing
//! feature toggles, broken favicons) never surface here; they are
//! handled where they occur.

use thiserror::Error;

/// Result type alias for sitesearch operations
pub type Result<T> = std::result::Result<T, SiteSearchError>;

/// Main error type for sitesearch
#[derive(Error, Debug)]
pub enum SiteSearchError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Index build failed: {0}")]
    IndexBuildFailed(String),

    #[error("Failed to load site index: {0}")]
    IndexLoadFailed(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiteSearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        match self {
            SiteSearchError::AssetNotFound(_) | SiteSearchError::InvalidPath(_) => true,
            SiteSearchError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error leaves the search view unusable
    pub fn is_fatal_to_view(&self) -> bool {
        matches!(
            self,
            SiteSearchError::IndexLoadFailed(_) | SiteSearchError::AssetNotFound(_)
        )
    }
}
