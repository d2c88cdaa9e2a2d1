//! CANIUSE-SUMMARY: caniuse payload to display records
//!
//! Filters the payload's features by the categories named in the query,
//! sorts them by full-support usage and, for every tracked browser, works out
//! whether the current version supports the feature and which version ranges
//! support it fully or partially.
//!
//! # Example
//!
//! ```ignore
//! use caniuse_summary::{build_summary, WidgetKind};
//!
//! let summary = build_summary(Some(&payload), "caniuse css3", WidgetKind::CanIuse)?;
//! for record in &summary.records {
//!     println!("{} {:.1}%", record.title, record.usage_y);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod record;

pub use builder::{current_support, FeatureSummaryBuilder};
pub use config::{SummaryConfig, WidgetKind};
pub use record::{BrowserSupport, CurrentSupport, DisplayRecord, FeatureSummary, SkippedFeature};

use caniuse_core::CaniuseError;
use serde_json::Value;

/// Build a summary with the stock configuration for `widget`.
pub fn build_summary(
    payload: Option<&Value>,
    query: &str,
    widget: WidgetKind,
) -> Result<FeatureSummary, CaniuseError> {
    FeatureSummaryBuilder::new(SummaryConfig::for_widget(widget))?.build(payload, query)
}
