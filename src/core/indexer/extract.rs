//! Per-page metadata extraction.
//!
//! Everything here works on the raw HTML text with forgiving regular
//! expressions. Nothing in this module fails: a page with broken or
//! missing markup simply yields fewer fields.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title(?:\s[^>]*)?>([^<]*)</title>").unwrap());

static SNIPPET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<!--\s*snippet\s*(.*?)-->").unwrap());

static LINK_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<link\b[^>]*>").unwrap());

static REL_ATTR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|\s)rel\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#).unwrap()
});

static HREF_ATTR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:^|\s)href\s*=\s*["']([^"']+)["']"#).unwrap());

static ABSOLUTE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Metadata pulled out of one page's HTML
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: Option<String>,
    pub snippet: String,
    pub favicon: Option<String>,
}

/// Extract title, snippet and declared favicon from a page
///
/// `rel_path` is the page's forward-slash path relative to the site
/// root; relative icon references are resolved against it.
pub fn extract_page(html: &str, rel_path: &str) -> ExtractedPage {
    ExtractedPage {
        title: extract_title(html),
        snippet: extract_snippet(html),
        favicon: extract_link_favicon(html, rel_path),
    }
}

/// Text of the first `<title>` element, trimmed
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .map(|cap| cap[1].trim().to_string())
}

/// Body of the first `<!-- snippet ... -->` comment, trimmed
pub fn extract_snippet(html: &str) -> String {
    SNIPPET_PATTERN
        .captures(html)
        .map(|cap| cap[1].trim().to_string())
        .unwrap_or_default()
}

/// Icon declared by the first `<link rel="icon">` carrying an href
///
/// An href that resolves to the site root itself (`/`, or `./` on a
/// root-level page) names no icon and yields `None`.
pub fn extract_link_favicon(html: &str, rel_path: &str) -> Option<String> {
    LINK_TAG_PATTERN
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| is_icon_link(tag))
        .find_map(|tag| {
            HREF_ATTR_PATTERN
                .captures(tag)
                .map(|cap| cap[1].trim().to_string())
                .filter(|href| !href.is_empty())
        })
        .map(|href| resolve_href(&href, rel_path))
        .filter(|favicon| !favicon.is_empty())
}

fn is_icon_link(tag: &str) -> bool {
    REL_ATTR_PATTERN.captures(tag).is_some_and(|cap| {
        cap.get(1)
            .or_else(|| cap.get(2))
            .or_else(|| cap.get(3))
            .is_some_and(|rel| rel.as_str().trim().eq_ignore_ascii_case("icon"))
    })
}

/// Resolve an icon href found in the page at `rel_path`
///
/// Absolute http(s) URLs are kept, root-relative paths lose their
/// leading slash, anything else is resolved against the page's own
/// directory.
pub fn resolve_href(href: &str, rel_path: &str) -> String {
    if ABSOLUTE_URL_PATTERN.is_match(href) {
        return href.to_string();
    }

    if let Some(stripped) = href.strip_prefix('/') {
        return stripped.to_string();
    }

    let mut segments: Vec<&str> = rel_path.split('/').collect();
    segments.pop();

    for segment in href.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Look for a conventionally named icon next to the page
///
/// Only the page's own directory is checked.
pub fn find_sibling_favicon(page: &Path, rel_path: &str, names: &[String]) -> Option<String> {
    let dir = page.parent()?;
    let rel_dir = rel_path.rsplit_once('/').map(|(dir, _)| dir);

    names
        .iter()
        .find(|name| dir.join(name.as_str()).is_file())
        .map(|name| match rel_dir {
            Some(rel_dir) => format!("{rel_dir}/{name}"),
            None => name.clone(),
        })
}
