//! caniuse-range: support table → human-readable version range.
//!
//! ```ignore
//! use caniuse_core::{SupportCode, VersionSupportTable};
//! use caniuse_range::compute_range;
//!
//! let table = VersionSupportTable::from_pairs([("11", "y"), ("10", "y"), ("9", "n")])?;
//! assert_eq!(compute_range(&table, SupportCode::Yes).to_string(), "v 10 - 11");
//! ```

pub mod compressor;
pub mod label;
pub mod range;

pub use compressor::{compute_range, compute_support, expand_ranges, RangeCompressor};
pub use range::{SupportRange, SupportRanges, PLACEHOLDER};
