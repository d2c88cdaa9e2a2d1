//! Range compression over one browser's support table.
//!
//! The table is expanded (hyphenated keys become their two bounds), ordered
//! newest first, and scanned once per target code. Each scan takes the first
//! contiguous run of versions whose cell is exactly the target code.
//!
//! Full (`y`) and partial (`a`) support are two independent scans over the
//! same sorted list. For tables whose codes are grouped monotonically by
//! recency (newest versions `y`, then `a`, then older codes) this yields the
//! same runs as a single interleaved traversal that hands the index from the
//! `y` pass to the `a` pass.
//!
//! Only the newest run counts. When support is not grouped by recency, older
//! versions in a separate run are left out, so `{12: y, 11: n, 10: y, 9: y}`
//! gives `v 12` rather than the min/max of every `y` version (`v 9 - 12`).

use caniuse_core::{SupportCode, SupportStatus, VersionSupportTable};
use tracing::trace;

use crate::label::{compare_descending, normalize_token, split_range};
use crate::range::{SupportRange, SupportRanges};

/// A support table expanded and sorted newest first. Borrowed, never mutated.
#[derive(Debug, Clone)]
pub struct RangeCompressor<'t> {
    versions: Vec<(String, &'t SupportStatus)>,
}

impl<'t> RangeCompressor<'t> {
    pub fn new(table: &'t VersionSupportTable) -> Self {
        let mut versions = expand_ranges(table);
        // stable: equal keys keep table order
        versions.sort_by(|(a, _), (b, _)| compare_descending(a, b));
        Self { versions }
    }

    /// Labels in scan order, newest first.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|(label, _)| label.as_str())
    }

    /// The first contiguous run of `target`, newest first.
    pub fn run(&self, target: SupportCode) -> Vec<&str> {
        self.versions
            .iter()
            .skip_while(|(_, status)| !status.is_exactly(target))
            .take_while(|(_, status)| status.is_exactly(target))
            .map(|(label, _)| label.as_str())
            .collect()
    }

    pub fn range(&self, target: SupportCode) -> SupportRange {
        SupportRange::from_run(&self.run(target))
    }

    pub fn ranges(&self) -> SupportRanges {
        SupportRanges {
            full: self.range(SupportCode::Yes),
            partial: self.range(SupportCode::Almost),
        }
    }
}

/// Replace every hyphenated key by its two bounds, both carrying the
/// composite key's status. Plain labels are trimmed to one period as well.
///
/// Labels that trim to the same text collapse into one entry, and the last
/// status applied wins:
/// - among plain labels, the later one in table order, so
///   `{"10.1.2": y, "10.1": n}` keeps only `10.1: n`;
/// - bounds are applied after all plain labels, so a bound overwrites a
///   plain label that normalizes to the same text.
///
/// A collapsed label keeps the position of its first occurrence.
pub fn expand_ranges(table: &VersionSupportTable) -> Vec<(String, &SupportStatus)> {
    let mut expanded: Vec<(String, &SupportStatus)> = Vec::with_capacity(table.len() + 2);
    let mut composites = Vec::new();

    for (label, status) in table.iter() {
        match split_range(label) {
            Some(bounds) => composites.push((label, bounds, status)),
            None => upsert(&mut expanded, normalize_token(label), status),
        }
    }

    for (label, (low, high), status) in composites {
        trace!(label, low, high, "expanding version range");
        upsert(&mut expanded, low, status);
        upsert(&mut expanded, high, status);
    }

    expanded
}

fn upsert<'t>(
    versions: &mut Vec<(String, &'t SupportStatus)>,
    label: &str,
    status: &'t SupportStatus,
) {
    match versions.iter_mut().find(|(existing, _)| existing == label) {
        Some(entry) => entry.1 = status,
        None => versions.push((label.to_string(), status)),
    }
}

pub fn compute_range(table: &VersionSupportTable, target: SupportCode) -> SupportRange {
    RangeCompressor::new(table).range(target)
}

/// Full and partial ranges in one expansion.
pub fn compute_support(table: &VersionSupportTable) -> SupportRanges {
    RangeCompressor::new(table).ranges()
}
