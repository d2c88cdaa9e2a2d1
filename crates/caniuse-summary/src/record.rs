//! Display records handed to the rendering layer.
use caniuse_core::{Browser, Platform};
use caniuse_in::CategoryTerm;
use caniuse_range::SupportRange;
use serde::Serialize;

use crate::config::WidgetKind;

/// Whether a browser's current version fully supports a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentSupport {
    /// The current version label, set only when it is fully supported
    pub value: Option<String>,
    pub is_currently_supported: bool,
}

impl CurrentSupport {
    pub fn unsupported() -> Self {
        Self {
            value: None,
            is_currently_supported: false,
        }
    }

    pub fn supported(version: &str) -> Self {
        Self {
            value: Some(version.to_string()),
            is_currently_supported: true,
        }
    }
}

/// One browser's column in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserSupport {
    pub browser: Browser,
    pub name: String,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub current: CurrentSupport,
    /// Versions with full support (`y`)
    pub full: SupportRange,
    /// Versions with partial support (`a`)
    pub partial: SupportRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub key: String,
    pub title: String,
    pub categories: Vec<String>,
    pub description: String,
    pub status: Option<String>,
    pub usage_y: f64,
    pub usage_a: f64,
    pub browsers: Vec<BrowserSupport>,
    /// Any tracked browser supports it in its current version
    pub supported: bool,
    pub supported_desktop: bool,
    pub supported_mobile: bool,
}

impl DisplayRecord {
    pub fn browser(&self, browser: Browser) -> Option<&BrowserSupport> {
        self.browsers.iter().find(|column| column.browser == browser)
    }
}

/// A feature left out because its entry was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFeature {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    pub widget: WidgetKind,
    pub name: String,
    pub source_name: String,
    pub source_url: String,
    pub terms: Vec<CategoryTerm>,
    /// Sorted by `usage_y`, highest first
    pub records: Vec<DisplayRecord>,
    pub skipped: Vec<SkippedFeature>,
}

impl FeatureSummary {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
