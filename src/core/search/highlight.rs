//! Match highlighting and HTML escaping.

use crate::core::search::pattern::QueryPattern;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Escape text for embedding in HTML content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap every non-overlapping match of `pattern` in `<mark>`
///
/// The whole text is escaped, matched or not. Zero-width matches are
/// left unmarked.
pub fn highlight_with(pattern: &QueryPattern, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for m in pattern.regex().find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));

    out
}
