//! Utility functions for string processing.

/// Normalize a field for matching: lowercase and trim.
///
/// Absent fields normalize to the empty string. No diacritic stripping and no
/// whitespace collapsing; the query and every field get the same treatment.
///
/// - `Some("  How To Reset? ")` → `"how to reset?"`
/// - `None` → `""`
pub fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Whitespace-separated tokens, deduplicated and sorted.
///
/// Sorted by byte order, so comparison strings built from it are stable.
pub fn token_set(value: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}
