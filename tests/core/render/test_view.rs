// Integration tests for the search view over a site on disk

use crate::common::{build_site, config_for, TestSite};
use sitesearch::core::render::markup::{LOAD_ERROR_HTML, PROMPT_HTML};
use sitesearch::core::render::{SearchView, ViewState};
use sitesearch::core::state::SiteDir;

async fn view_for(site: &TestSite, initial: &str) -> SearchView<String> {
    SearchView::initialize(
        &SiteDir::new(site.path()),
        &config_for(site.path()),
        initial,
        String::new(),
    )
    .await
}

#[tokio::test]
async fn test_view_starts_with_prompt() {
    let site = TestSite::sample();
    build_site(site.path());

    let view = view_for(&site, "").await;
    assert!(view.is_ready());
    assert_eq!(view.surface(), PROMPT_HTML);
}

#[tokio::test]
async fn test_view_renders_initial_query() {
    let site = TestSite::sample();
    build_site(site.path());

    let view = view_for(&site, "about").await;
    let html = view.surface();
    assert_eq!(html.matches(r#"<div class="result">"#).count(), 1);
    assert!(html.contains(r#"href="about.html""#));
    assert!(html.contains("<mark>About</mark> Us"));
}

#[tokio::test]
async fn test_view_follows_input_events() {
    let site = TestSite::sample();
    build_site(site.path());

    let mut view = view_for(&site, "").await;

    view.on_input("first");
    assert!(view.surface().contains("blog/first-post.html"));

    view.on_input("zzz-nothing");
    assert_eq!(
        view.surface(),
        r#"<em>No results found for "<b>zzz-nothing</b>"</em>"#
    );

    view.on_input("");
    assert_eq!(view.surface(), PROMPT_HTML);
    assert_eq!(view.query(), "");
}

#[tokio::test]
async fn test_view_uses_page_and_default_favicons() {
    let site = TestSite::sample();
    build_site(site.path());

    let mut view = view_for(&site, "").await;

    view.on_input("about");
    assert!(view.surface().contains(r#"src="brand.svg""#));
    assert!(view.surface().contains(r#"data-fallback="favicon.ico""#));

    view.on_input("setup");
    assert!(view.surface().contains(r#"src="favicon.ico""#));
}

#[tokio::test]
async fn test_view_honours_toggles_file() {
    let site = TestSite::sample();
    build_site(site.path());
    site.write(
        "featureToggles.json",
        r#"{"showSnippet": false, "showFavicon": false}"#,
    );

    let view = view_for(&site, "about").await;
    let html = view.surface();
    assert!(html.contains("result-title"));
    assert!(html.contains("result-path"));
    assert!(!html.contains("result-snippet"));
    assert!(!html.contains("result-favicon"));
}

#[tokio::test]
async fn test_view_ignores_malformed_toggles() {
    let site = TestSite::sample();
    build_site(site.path());
    site.write("featureToggles.json", "{ not json");

    let view = view_for(&site, "about").await;
    assert!(view.is_ready());
    assert!(view.surface().contains("result-snippet"));
}

#[tokio::test]
async fn test_view_escapes_snippet_markup() {
    let site = TestSite::sample();
    build_site(site.path());

    let view = view_for(&site, "hello").await;
    assert!(view
        .surface()
        .contains("<mark>Hello</mark> &lt;world&gt; &amp; friends"));
}

#[tokio::test]
async fn test_view_without_index_shows_error() {
    let site = TestSite::sample();

    let mut view = view_for(&site, "about").await;
    assert!(!view.is_ready());
    assert!(matches!(view.state(), ViewState::Failed(_)));
    assert_eq!(view.surface(), LOAD_ERROR_HTML);

    view.on_input("home");
    assert_eq!(view.surface(), LOAD_ERROR_HTML);
}

#[tokio::test]
async fn test_view_with_corrupt_index_shows_error() {
    let site = TestSite::sample();
    site.write("siteIndex.json", "[{\"title\": 1}]");

    let view = view_for(&site, "").await;
    assert!(!view.is_ready());
    assert_eq!(view.surface(), LOAD_ERROR_HTML);
}
