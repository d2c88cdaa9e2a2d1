//! Query normalization for CANIUSE-IN.
//!
//! Normalizes the free-text query before category extraction:
//! - Lowercase conversion
//! - Whitespace normalization, so "js   api" still reads as "js api"

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Multiple whitespace pattern
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize a query for category matching
pub fn normalize(query: &str) -> String {
    let lowered = query.trim().to_lowercase();
    MULTI_SPACE.replace_all(&lowered, " ").into_owned()
}

/// True when the query has nothing to match against
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
