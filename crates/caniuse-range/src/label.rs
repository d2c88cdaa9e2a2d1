//! Version label handling: precision trimming, range splitting, ordering.
//!
//! Labels are stored as strings but ordered as numbers. Anything that does
//! not parse as a finite number (`"TP"`, `"all"`) sorts below every numeric
//! label and keeps table order among its peers.

use std::cmp::Ordering;

/// Trim a token to at most one period, dropping from the last period.
///
/// `"10.1.2"` becomes `"10.1"`; `"11"` and `"10.1"` are returned untouched.
pub fn normalize_token(token: &str) -> &str {
    let mut token = token.trim();
    while token.matches('.').count() >= 2 {
        match token.rfind('.') {
            Some(idx) => token = &token[..idx],
            None => break,
        }
    }
    token
}

/// Split a hyphenated range label into its normalized bounds.
///
/// Only the first two segments count, so `"1-2-3"` yields `("1", "2")`.
/// A label with an empty side is not a range.
pub fn split_range(label: &str) -> Option<(&str, &str)> {
    let mut parts = label.splitn(3, '-');
    let low = normalize_token(parts.next()?);
    let high = normalize_token(parts.next()?);
    if low.is_empty() || high.is_empty() {
        return None;
    }
    Some((low, high))
}

pub fn numeric_value(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Newest first.
pub fn compare_descending(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest first; used when computing range bounds.
pub fn compare_ascending(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("10.1.2"), "10.1");
        assert_eq!(normalize_token("10.1"), "10.1");
        assert_eq!(normalize_token("11"), "11");
        assert_eq!(normalize_token("1.2.3.4"), "1.2");
    }

    #[test]
    fn test_split_range() {
        assert_eq!(split_range("10.1-10.3"), Some(("10.1", "10.3")));
        assert_eq!(split_range("4.2.1-4.3.5"), Some(("4.2", "4.3")));
        assert_eq!(split_range("11"), None);
        assert_eq!(split_range("-5"), None);
        assert_eq!(split_range("1-2-3"), Some(("1", "2")));
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let mut labels = vec!["9", "10", "4.4", "11", "10.1"];
        labels.sort_by(|a, b| compare_descending(a, b));
        assert_eq!(labels, vec!["11", "10.1", "10", "9", "4.4"]);
        labels.sort_by(|a, b| compare_ascending(a, b));
        assert_eq!(labels, vec!["4.4", "9", "10", "10.1", "11"]);
    }

    #[test]
    fn test_non_numeric_sorts_last() {
        let mut labels = vec!["TP", "3", "all", "12"];
        labels.sort_by(|a, b| compare_descending(a, b));
        assert_eq!(labels, vec!["12", "3", "TP", "all"]);
    }
}
