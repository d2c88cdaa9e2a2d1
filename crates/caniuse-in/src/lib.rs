//! CANIUSE-IN: free-text query to category terms
//!
//! The widgets list features by category. This crate turns the user's query
//! into the set of category terms to keep.
//!
//! # Example
//!
//! ```ignore
//! use caniuse_in::{extract_terms, matches_any};
//!
//! let terms = extract_terms("can i use css3");
//! assert!(matches_any(&terms, &["CSS3"]));
//! ```

pub mod categories;
pub mod normalizer;

pub use categories::{
    extract_terms, matches_any, CategoryMatcher, CategoryTerm, DEFAULT_CATEGORY_PATTERN,
};
pub use normalizer::{is_blank, normalize};
