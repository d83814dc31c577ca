//! Term extraction - turns a free-text prompt into lookup keys.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of `, . ; @ # ? ! & $ [ ] ( )`, plus the spaces right after them.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,.;@#?!&$\[\]()]+ *").expect("punctuation pattern is valid"));

/// A normalized token taken from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract terms from a prompt.
///
/// Each punctuation run is replaced by a single space, so `Dr.Baer` becomes
/// two terms. Order and repeats are kept.
pub fn extract_terms(prompt: &str) -> Vec<Term> {
    PUNCTUATION
        .replace_all(prompt, " ")
        .split_whitespace()
        .map(|token| Term(token.to_string()))
        .collect()
}
