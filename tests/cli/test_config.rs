//! Tests for the show-config CLI command

use crate::cli::test_helpers::built_sample_site;
use sitesearch::cli::commands::config::{execute, ConfigArgs};
use sitesearch::cli::OutputFormat;

/// Test config display in human format
#[tokio::test]
async fn test_config_human() {
    let (_site, config) = built_sample_site();

    let result = execute(ConfigArgs { no_toggles: false }, &config, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test config display in JSON format without toggles
#[tokio::test]
async fn test_config_json_no_toggles() {
    let (_site, config) = built_sample_site();

    let result = execute(ConfigArgs { no_toggles: true }, &config, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test malformed toggles do not fail the command
#[tokio::test]
async fn test_config_malformed_toggles() {
    let (site, config) = built_sample_site();
    site.write("featureToggles.json", "not json");

    let result = execute(ConfigArgs { no_toggles: false }, &config, OutputFormat::Json).await;
    assert!(result.is_ok());
}
