//! FeatureSummaryBuilder: payload + query → sorted display records.
//!
//! One synchronous pass:
//!
//! ```text
//! payload → features → category filter → records → sort by usage_perc_y
//!                                          ↓
//!                         per browser: current support + ranges
//! ```

use caniuse_core::{
    ApiPayload, Browser, CaniuseError, Feature, Platform, SupportCode, VersionSupportTable,
};
use caniuse_in::{matches_any, CategoryMatcher, CategoryTerm};
use caniuse_range::RangeCompressor;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::record::{BrowserSupport, CurrentSupport, DisplayRecord, FeatureSummary, SkippedFeature};

pub struct FeatureSummaryBuilder {
    config: SummaryConfig,
    matcher: CategoryMatcher,
}

impl FeatureSummaryBuilder {
    pub fn new(config: SummaryConfig) -> Result<Self, CaniuseError> {
        config.validate()?;
        let matcher = CategoryMatcher::new(&config.category_pattern)?;
        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Build from the raw fetch result. Absent or falsy payloads fail with
    /// [`CaniuseError::DataUnavailable`] before anything is rendered.
    pub fn build(
        &self,
        payload: Option<&Value>,
        query: &str,
    ) -> Result<FeatureSummary, CaniuseError> {
        let payload = ApiPayload::from_value(payload)?;
        self.build_from(&payload, query)
    }

    pub fn build_from(
        &self,
        payload: &ApiPayload,
        query: &str,
    ) -> Result<FeatureSummary, CaniuseError> {
        // Agents are shared by every feature, so a gap here fails the whole summary.
        let current_versions = self
            .config
            .browsers
            .iter()
            .map(|&browser| payload.current_version(browser).map(|version| (browser, version)))
            .collect::<Result<Vec<_>, _>>()?;

        let terms = self.matcher.extract_terms(query);
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        if terms.is_empty() {
            debug!(query, "query names no category");
        }

        for (key, raw) in &payload.data {
            if terms.is_empty() {
                break;
            }

            // categories first; the rest of the entry is parsed only when kept
            match is_selected(raw, &terms) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!(feature = %key, error = %e, "skipping malformed feature");
                    skipped.push(SkippedFeature { key: key.clone(), reason: e.to_string() });
                    continue;
                }
            }

            let built = Feature::from_value(raw)
                .and_then(|feature| self.normalize(key, &feature, payload, &current_versions));
            match built {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(feature = %key, error = %e, "skipping malformed feature");
                    skipped.push(SkippedFeature { key: key.clone(), reason: e.to_string() });
                }
            }
        }

        // stable: equal usage keeps payload order
        records.sort_by(|a, b| b.usage_y.total_cmp(&a.usage_y));

        debug!(
            widget = %self.config.widget,
            terms = terms.len(),
            records = records.len(),
            skipped = skipped.len(),
            "built feature summary"
        );

        Ok(FeatureSummary {
            widget: self.config.widget,
            name: self.config.widget.name().to_string(),
            source_name: self.config.source_name.clone(),
            source_url: self.config.source_url.clone(),
            terms,
            records,
            skipped,
        })
    }

    fn normalize(
        &self,
        key: &str,
        feature: &Feature,
        payload: &ApiPayload,
        current_versions: &[(Browser, &str)],
    ) -> Result<DisplayRecord, CaniuseError> {
        let mut browsers = Vec::with_capacity(current_versions.len());
        for &(browser, current_version) in current_versions {
            let table = feature.table(browser)?;
            browsers.push(self.browser_support(browser, &table, current_version));
        }

        let supported_on = |platform: Option<Platform>| {
            browsers.iter().any(|column: &BrowserSupport| {
                column.current.is_currently_supported
                    && platform.map_or(true, |p| column.platform == p)
            })
        };
        let supported = supported_on(None);
        let supported_desktop = supported_on(Some(Platform::Desktop));
        let supported_mobile = supported_on(Some(Platform::Mobile));

        Ok(DisplayRecord {
            key: key.to_string(),
            title: feature.title.clone(),
            categories: feature.categories.clone(),
            description: feature.description.clone(),
            status: payload.status_label(&feature.status).map(str::to_string),
            usage_y: feature.usage_perc_y,
            usage_a: feature.usage_perc_a,
            browsers,
            supported,
            supported_desktop,
            supported_mobile,
        })
    }

    fn browser_support(
        &self,
        browser: Browser,
        table: &VersionSupportTable,
        current_version: &str,
    ) -> BrowserSupport {
        let ranges = RangeCompressor::new(table).ranges();
        BrowserSupport {
            browser,
            name: browser.display_name().to_string(),
            platform: browser.platform(),
            icon: self
                .config
                .widget
                .shows_icons()
                .then(|| self.config.icon_path(browser)),
            current: current_support(table, current_version),
            full: ranges.full,
            partial: ranges.partial,
        }
    }
}

/// Whether a raw feature's `categories` intersect the query terms.
fn is_selected(raw: &Value, terms: &[CategoryTerm]) -> Result<bool, CaniuseError> {
    let categories = raw
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| CaniuseError::Schema("missing field `categories`".to_string()))?;
    let categories = categories
        .iter()
        .map(|category| {
            category
                .as_str()
                .ok_or_else(|| CaniuseError::Schema("category is not a string".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(matches_any(terms, &categories))
}

/// Look the current version up in the unexpanded table.
///
/// Only an exact `y` cell counts; a current version folded into a
/// hyphenated key, or carrying a footnote, reads as unsupported.
pub fn current_support(table: &VersionSupportTable, current_version: &str) -> CurrentSupport {
    match table.get(current_version) {
        Some(status) if status.is_exactly(SupportCode::Yes) => {
            CurrentSupport::supported(current_version)
        }
        _ => CurrentSupport::unsupported(),
    }
}
