//! Pure HTML rendering of search output.
//!
//! Nothing here touches I/O: given state and a query these functions
//! return the markup for the results surface.

use crate::core::search::{escape_html, SearchEngine};
use crate::core::state::AppState;
use crate::core::types::{FeatureToggles, PageEntry};

/// Shown while the query is blank
pub const PROMPT_HTML: &str = "<em>Type to search website pages...</em>";

/// Shown when the view could not load its index
pub const LOAD_ERROR_HTML: &str =
    r#"<span style="color:red">Failed to load site index or feature toggles.</span>"#;

/// Markup for the current query against loaded state
pub fn render_view(state: &AppState, query: &str) -> String {
    if query.trim().is_empty() {
        return PROMPT_HTML.to_string();
    }

    let results = state.engine.search(query);
    if results.is_empty() {
        return render_no_results(query);
    }

    render_results(&state.engine, &results, query, &state.toggles)
}

/// "No results" message echoing the escaped query
pub fn render_no_results(query: &str) -> String {
    format!(
        r#"<em>No results found for "<b>{}</b>"</em>"#,
        escape_html(query)
    )
}

/// One result block per entry, in the given order
pub fn render_results(
    engine: &SearchEngine,
    entries: &[&PageEntry],
    query: &str,
    toggles: &FeatureToggles,
) -> String {
    entries
        .iter()
        .map(|page| render_result(engine, page, query, toggles))
        .collect()
}

/// A single result block, gated field by field by `toggles`
pub fn render_result(
    engine: &SearchEngine,
    page: &PageEntry,
    query: &str,
    toggles: &FeatureToggles,
) -> String {
    let mut html = String::from(r#"<div class="result">"#);

    if toggles.show_favicon {
        html.push_str(&render_favicon(page, toggles));
    }

    if toggles.show_title {
        html.push_str(&format!(
            r#"<a class="result-title" href="{}" target="_blank">{}</a>"#,
            escape_html(&page.path),
            engine.highlight(&page.title, query)
        ));
    }

    if toggles.show_path {
        html.push_str(&format!(
            r#"<div class="result-path">{}</div>"#,
            engine.highlight(&page.path, query)
        ));
    }

    if toggles.show_snippet {
        html.push_str(&format!(
            r#"<div class="result-snippet">{}</div>"#,
            engine.highlight(&page.snippet, query)
        ));
    }

    html.push_str("</div>");
    html
}

/// Icon element that swaps to the default icon if its source fails
fn render_favicon(page: &PageEntry, toggles: &FeatureToggles) -> String {
    let src = page.favicon().unwrap_or(&toggles.default_favicon);
    format!(
        r#"<img class="result-favicon" src="{}" alt="favicon" data-fallback="{}" onerror="this.onerror=null;this.src=this.dataset.fallback">"#,
        escape_html(src),
        escape_html(&toggles.default_favicon)
    )
}
