//! Tests for the live CLI command
//!
//! Drives the view with in-memory input and inspects every frame.

use crate::cli::test_helpers::{built_sample_site, unbuilt_sample_site};
use sitesearch::cli::commands::live::{execute_with, LiveArgs};
use sitesearch::cli::OutputFormat;
use sitesearch::core::render::markup::{LOAD_ERROR_HTML, PROMPT_HTML};
use std::io::Cursor;

fn args(initial: &str) -> LiveArgs {
    LiveArgs {
        initial: initial.to_string(),
    }
}

/// Test one frame per input line, after the initial frame
#[tokio::test]
async fn test_live_frames_human() {
    let (_site, config) = built_sample_site();
    let input = Cursor::new("about\n\nxyzzy\n");
    let mut output = Vec::new();

    execute_with(args(""), &config, OutputFormat::Human, input, &mut output)
        .await
        .expect("Live should succeed");

    let text = String::from_utf8(output).unwrap();
    let frames: Vec<&str> = text.lines().collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0], PROMPT_HTML);
    assert!(frames[1].contains(r#"href="about.html""#));
    assert_eq!(frames[2], PROMPT_HTML);
    assert!(frames[3].contains("No results found"));
}

/// Test the initial query is rendered before any input
#[tokio::test]
async fn test_live_initial_query_json() {
    let (_site, config) = built_sample_site();
    let mut output = Vec::new();

    execute_with(
        args("post"),
        &config,
        OutputFormat::Json,
        Cursor::new(""),
        &mut output,
    )
    .await
    .expect("Live should succeed");

    let text = String::from_utf8(output).unwrap();
    let frames: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0]["query"], "post");
    assert!(frames[0]["html"]
        .as_str()
        .unwrap()
        .contains("blog/first-post.html"));
}

/// Test the error frame is written and input is not consumed
#[tokio::test]
async fn test_live_missing_index() {
    let (_site, config) = unbuilt_sample_site();
    let mut output = Vec::new();

    let result = execute_with(
        args(""),
        &config,
        OutputFormat::Human,
        Cursor::new("about\n"),
        &mut output,
    )
    .await;

    assert!(result.is_err());
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec![LOAD_ERROR_HTML]);
}
