//! Integration tests for caniuse-in against caniuse-style category lists.

use caniuse_in::{extract_terms, matches_any, CategoryMatcher};

/// Category lists as they appear in the caniuse data feed.
const FEATURES: &[(&str, &[&str])] = &[
    ("flexbox", &["CSS3"]),
    ("canvas", &["Canvas", "HTML5"]),
    ("svg-filters", &["SVG"]),
    ("fetch", &["JS API"]),
    ("css-table", &["CSS2"]),
    ("css-sel2", &["CSS"]),
    ("websockets", &["JS API", "Other"]),
];

fn kept(query: &str) -> Vec<&'static str> {
    let terms = extract_terms(query);
    FEATURES
        .iter()
        .filter(|(_, categories)| matches_any(&terms, *categories))
        .map(|(key, _)| *key)
        .collect()
}

#[test]
fn test_css3_query() {
    assert_eq!(kept("caniuse css3"), vec!["flexbox"]);
}

#[test]
fn test_mixed_query() {
    assert_eq!(kept("HTML5 or svg support"), vec!["canvas", "svg-filters"]);
}

#[test]
fn test_js_api_query() {
    assert_eq!(kept("js api compatibility"), vec!["fetch", "websockets"]);
}

#[test]
fn test_plain_css_is_its_own_category() {
    assert_eq!(kept("css"), vec!["css-sel2"]);
}

#[test]
fn test_unrelated_query_keeps_nothing() {
    assert!(kept("browser compatibility").is_empty());
}

#[test]
fn test_custom_matcher_same_contract() {
    let matcher = CategoryMatcher::new("other").unwrap();
    let terms = matcher.extract_terms("Other things");
    assert!(matches_any(&terms, &["JS API", "Other"]));
}
