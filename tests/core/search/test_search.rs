// Integration tests for search over a built index

use crate::common::{build_site, load_state, TestSite};
use sitesearch::core::search::SearchEngine;
use sitesearch::core::types::{PageEntry, SiteIndex};

fn paths<'a>(results: &[&'a PageEntry]) -> Vec<&'a str> {
    results.iter().map(|p| p.path.as_str()).collect()
}

fn two_page_engine() -> SearchEngine {
    SearchEngine::new(SiteIndex::new(vec![
        PageEntry {
            title: "Home".to_string(),
            path: "index.html".to_string(),
            snippet: "Welcome".to_string(),
            favicon: None,
        },
        PageEntry {
            title: "About Us".to_string(),
            path: "about.html".to_string(),
            snippet: "Our story".to_string(),
            favicon: None,
        },
    ]))
}

#[tokio::test]
async fn test_search_built_site() {
    let site = TestSite::sample();
    build_site(site.path());
    let state = load_state(site.path()).await;

    let results = state.engine.search("post");
    assert_eq!(paths(&results), vec!["blog/first-post.html"]);
}

#[tokio::test]
async fn test_search_matches_path_and_snippet() {
    let site = TestSite::sample();
    build_site(site.path());
    let state = load_state(site.path()).await;

    // Only the path mentions "guide"
    assert_eq!(
        paths(&state.engine.search("guide")),
        vec!["docs/guide/setup.html", "docs/guide/usage.html"]
    );
    // Only the snippet mentions "story"
    assert_eq!(paths(&state.engine.search("story")), vec!["about.html"]);
}

#[tokio::test]
async fn test_search_preserves_index_order() {
    let site = TestSite::generated(20);
    build_site(site.path());
    let state = load_state(site.path()).await;

    let results = state.engine.search("page");
    let all: Vec<&str> = state
        .engine
        .index()
        .pages()
        .iter()
        .map(|p| p.path.as_str())
        .filter(|p| p.contains("page_"))
        .collect();
    assert_eq!(paths(&results), all);
}

#[test]
fn test_search_case_insensitive() {
    let engine = two_page_engine();

    assert_eq!(paths(&engine.search("about")), vec!["about.html"]);
    assert_eq!(paths(&engine.search("ABOUT")), vec!["about.html"]);
}

#[test]
fn test_search_pattern_syntax() {
    let engine = two_page_engine();

    assert_eq!(paths(&engine.search("^home$")), vec!["index.html"]);
    assert_eq!(
        paths(&engine.search("welcome|story")),
        vec!["index.html", "about.html"]
    );
}

#[test]
fn test_invalid_pattern_falls_back_to_literal() {
    let engine = SearchEngine::new(SiteIndex::new(vec![PageEntry {
        title: "Learn C++ (fast)".to_string(),
        path: "cpp.html".to_string(),
        snippet: String::new(),
        favicon: None,
    }]));

    let results = engine.search("c++ (");
    assert_eq!(paths(&results), vec!["cpp.html"]);
    assert!(engine.compile("c++ (").is_literal());
}

#[test]
fn test_blank_query_has_no_results() {
    let engine = two_page_engine();

    assert!(engine.search("").is_empty());
    assert!(engine.search("   ").is_empty());
}

#[test]
fn test_highlight_marks_every_match() {
    let engine = two_page_engine();

    assert_eq!(
        engine.highlight("About us, about them", "about"),
        "<mark>About</mark> us, <mark>about</mark> them"
    );
}

#[test]
fn test_highlight_escapes_page_text() {
    let engine = two_page_engine();

    let html = engine.highlight("Hello <world> & friends", "world");
    assert_eq!(html, "Hello &lt;<mark>world</mark>&gt; &amp; friends");
}

#[test]
fn test_highlight_escapes_matched_markup() {
    let engine = two_page_engine();

    let html = engine.highlight("<script>alert(1)</script>", "<script>");
    assert!(!html.contains("<script>"));
    assert!(html.starts_with("<mark>&lt;script&gt;</mark>"));
}

#[test]
fn test_search_is_deterministic() {
    let engine = two_page_engine();

    let first = paths(&engine.search("o"));
    let second = paths(&engine.search("o"));
    assert_eq!(first, second);
}
