//! Category term extraction.
//!
//! A query such as "caniuse css3 and html5" names the feature categories to
//! list. Each match of the category pattern becomes an upper-case term that
//! is compared against a feature's `categories` (caniuse stores them
//! upper-case: "CSS3", "HTML5", "JS API").

use caniuse_core::CaniuseError;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::normalizer::{is_blank, normalize};

/// Category tokens the widgets answer for.
pub const DEFAULT_CATEGORY_PATTERN: &str = r"css[2-3]?|html5|svg|js api";

lazy_static! {
    static ref DEFAULT_CATEGORY_REGEX: Regex = build_regex(DEFAULT_CATEGORY_PATTERN).unwrap();
}

fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// An upper-cased category token taken from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryTerm(String);

impl CategoryTerm {
    pub fn new(term: &str) -> Self {
        CategoryTerm(term.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any of a feature's categories equals this term, ignoring case.
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        categories
            .iter()
            .any(|category| category.as_ref().eq_ignore_ascii_case(&self.0))
    }
}

impl fmt::Display for CategoryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled category pattern.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    regex: Regex,
}

impl CategoryMatcher {
    /// Compile a custom pattern; matching is always case-insensitive.
    pub fn new(pattern: &str) -> Result<Self, CaniuseError> {
        let regex = build_regex(pattern)
            .map_err(|e| CaniuseError::Config(format!("bad category pattern: {}", e)))?;
        Ok(Self { regex })
    }

    /// Every match in the query, upper-cased, first occurrence kept.
    pub fn extract_terms(&self, query: &str) -> Vec<CategoryTerm> {
        if is_blank(query) {
            return Vec::new();
        }
        let normalized = normalize(query);
        let mut terms: Vec<CategoryTerm> = Vec::new();
        for found in self.regex.find_iter(&normalized) {
            let term = CategoryTerm::new(found.as_str());
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
        trace!(query = %normalized, terms = terms.len(), "extracted category terms");
        terms
    }
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self {
            regex: DEFAULT_CATEGORY_REGEX.clone(),
        }
    }
}

/// Extract terms with the default pattern.
pub fn extract_terms(query: &str) -> Vec<CategoryTerm> {
    CategoryMatcher::default().extract_terms(query)
}

/// Whether a feature's categories intersect the query terms.
pub fn matches_any<S: AsRef<str>>(terms: &[CategoryTerm], categories: &[S]) -> bool {
    terms.iter().any(|term| term.matches(categories))
}
