//! Widget configuration, loaded from YAML.
//!
//! ```yaml
//! widget: caniuse_lists
//! category_pattern: "css[2-3]?|html5|svg|js api"
//! browsers: [ie, chrome, firefox, android, ios_saf]
//! asset_root: assets
//! ```
//!
//! Every key is optional; the defaults reproduce the stock widgets.

use caniuse_core::{Browser, CaniuseError, SOURCE_NAME, SOURCE_URL};
use caniuse_in::DEFAULT_CATEGORY_PATTERN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which instant answer is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WidgetKind {
    /// Compact list with one `supported` flag.
    #[default]
    #[serde(rename = "can_iuse")]
    CanIuse,
    /// Grouped desktop/mobile list with browser icons.
    #[serde(rename = "caniuse_lists")]
    CaniuseLists,
}

impl WidgetKind {
    pub fn id(self) -> &'static str {
        match self {
            WidgetKind::CanIuse => "can_iuse",
            WidgetKind::CaniuseLists => "caniuse_lists",
        }
    }

    pub fn name(self) -> &'static str {
        "Can I Use"
    }

    pub fn shows_icons(self) -> bool {
        matches!(self, WidgetKind::CaniuseLists)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WidgetKind {
    type Err = CaniuseError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "can_iuse" => Ok(WidgetKind::CanIuse),
            "caniuse_lists" => Ok(WidgetKind::CaniuseLists),
            other => Err(CaniuseError::Config(format!("unknown widget {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub widget: WidgetKind,
    #[serde(default = "default_category_pattern")]
    pub category_pattern: String,
    #[serde(default = "default_browsers")]
    pub browsers: Vec<Browser>,
    /// Prefix for browser icon paths
    #[serde(default = "default_asset_root")]
    pub asset_root: String,
    #[serde(default = "default_source_name")]
    pub source_name: String,
    #[serde(default = "default_source_url")]
    pub source_url: String,
}

fn default_category_pattern() -> String {
    DEFAULT_CATEGORY_PATTERN.to_string()
}

fn default_browsers() -> Vec<Browser> {
    Browser::ALL.to_vec()
}

fn default_asset_root() -> String {
    "assets".to_string()
}

fn default_source_name() -> String {
    SOURCE_NAME.to_string()
}

fn default_source_url() -> String {
    SOURCE_URL.to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            widget: WidgetKind::default(),
            category_pattern: default_category_pattern(),
            browsers: default_browsers(),
            asset_root: default_asset_root(),
            source_name: default_source_name(),
            source_url: default_source_url(),
        }
    }
}

impl SummaryConfig {
    pub fn for_widget(widget: WidgetKind) -> Self {
        Self {
            widget,
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CaniuseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaniuseError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, CaniuseError> {
        let config: SummaryConfig =
            serde_yaml::from_str(yaml).map_err(|e| CaniuseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CaniuseError> {
        if self.browsers.is_empty() {
            return Err(CaniuseError::Config("no browsers to track".to_string()));
        }
        for (idx, browser) in self.browsers.iter().enumerate() {
            if self.browsers[..idx].contains(browser) {
                return Err(CaniuseError::Config(format!("browser {} listed twice", browser)));
            }
        }
        Ok(())
    }

    /// Icon path for a browser, under the configured asset root.
    pub fn icon_path(&self, browser: Browser) -> String {
        let root = self.asset_root.trim_end_matches('/');
        if root.is_empty() {
            browser.icon_asset().to_string()
        } else {
            format!("{}/{}", root, browser.icon_asset())
        }
    }
}
