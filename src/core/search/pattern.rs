//! Query compilation with literal fallback.
//!
//! A query is first compiled as a case-insensitive regular
//! expression. Input that is not valid syntax (an unbalanced `(`, a
//! dangling `*`, a lone `\`) is compiled again as a literal string
//! instead, so arbitrary user input always yields a usable pattern.

use regex::{Regex, RegexBuilder};

/// A compiled query, tagged with how it was compiled
#[derive(Debug, Clone)]
pub enum QueryPattern {
    /// The query was valid pattern syntax
    AsGiven(Regex),
    /// The query was escaped and matched literally
    Literal(Regex),
}

impl QueryPattern {
    /// Compile a query, falling back to literal matching
    pub fn compile(query: &str) -> Self {
        match build(query) {
            Ok(regex) => QueryPattern::AsGiven(regex),
            Err(e) => {
                tracing::debug!("Query {:?} is not a valid pattern ({}), matching literally", query, e);
                QueryPattern::Literal(compile_literal(query))
            }
        }
    }

    /// Compile a query after clipping it to `max_chars` characters
    pub fn compile_clipped(query: &str, max_chars: usize) -> Self {
        Self::compile(clip_query(query, max_chars))
    }

    pub fn regex(&self) -> &Regex {
        match self {
            QueryPattern::AsGiven(regex) | QueryPattern::Literal(regex) => regex,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, QueryPattern::Literal(_))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn compile_literal(query: &str) -> Regex {
    // An escaped string is always valid syntax, and with the size limit
    // lifted nothing else can reject it.
    RegexBuilder::new(&escape_literal(query))
        .case_insensitive(true)
        .size_limit(usize::MAX)
        .build()
        .expect("escaped query is a valid pattern")
}

/// Escape every pattern-special character so the query matches itself
pub fn escape_literal(query: &str) -> String {
    regex::escape(query)
}

/// Clip a query to at most `max_chars` characters
pub fn clip_query(query: &str, max_chars: usize) -> &str {
    match query.char_indices().nth(max_chars) {
        Some((idx, _)) => &query[..idx],
        None => query,
    }
}
