//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Built sample sites ready for search/render tests
//! - Configurations matching CLI execute() signatures

use crate::common::{build_site, config_for, TestSite};
use sitesearch::core::config::Config;

/// Sample site with its index already written, plus a matching config
pub fn built_sample_site() -> (TestSite, Config) {
    let site = TestSite::sample();
    build_site(site.path());
    let config = config_for(site.path());
    (site, config)
}

/// Sample site with no index document yet, plus a matching config
pub fn unbuilt_sample_site() -> (TestSite, Config) {
    let site = TestSite::sample();
    let config = config_for(site.path());
    (site, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_sample_site() {
        let (site, config) = built_sample_site();

        assert!(site.path().join("siteIndex.json").exists());
        assert_eq!(config.site.root, site.path());
    }

    #[test]
    fn test_unbuilt_sample_site() {
        let (site, config) = unbuilt_sample_site();

        assert!(!config.index_path().exists());
        assert!(site.path().join("index.html").exists());
    }
}
