//! Tests for the render CLI command

use crate::cli::test_helpers::{built_sample_site, unbuilt_sample_site};
use sitesearch::cli::commands::render::{execute, RenderArgs};
use sitesearch::cli::OutputFormat;

/// Test rendering results for a query
#[tokio::test]
async fn test_render_query_human() {
    let (_site, config) = built_sample_site();

    let args = RenderArgs {
        query: "about".to_string(),
    };
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_ok(), "Render should succeed: {:?}", result.err());
}

/// Test rendering the prompt in JSON format
#[tokio::test]
async fn test_render_blank_json() {
    let (_site, config) = built_sample_site();

    let args = RenderArgs {
        query: String::new(),
    };
    let result = execute(args, &config, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test rendering without an index reports failure
#[tokio::test]
async fn test_render_missing_index() {
    let (_site, config) = unbuilt_sample_site();

    let args = RenderArgs {
        query: "about".to_string(),
    };
    let result = execute(args, &config, OutputFormat::Human).await;
    assert!(result.is_err());
}
