use serde::{Serialize, Serializer};
use std::fmt;

use crate::label::compare_ascending;

/// Rendered when no version carries the target code.
pub const PLACEHOLDER: &str = " - ";

/// A compressed run of versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportRange {
    Placeholder,
    Single(String),
    Span { min: String, max: String },
}

impl SupportRange {
    /// Bound a run of labels, in any order.
    pub fn from_run<S: AsRef<str>>(run: &[S]) -> Self {
        let mut sorted: Vec<&str> = run.iter().map(AsRef::as_ref).collect();
        sorted.sort_by(|a, b| compare_ascending(a, b));

        match sorted.as_slice() {
            [] => SupportRange::Placeholder,
            [first, .., last] if first != last => SupportRange::Span {
                min: first.to_string(),
                max: last.to_string(),
            },
            [first, ..] => SupportRange::Single(first.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SupportRange::Placeholder)
    }
}

impl fmt::Display for SupportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportRange::Placeholder => f.write_str(PLACEHOLDER),
            SupportRange::Single(version) => write!(f, "v {}", version),
            SupportRange::Span { min, max } => write!(f, "v {} - {}", min, max),
        }
    }
}

impl Serialize for SupportRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Full and partial support ranges for one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportRanges {
    pub full: SupportRange,
    pub partial: SupportRange,
}
