//! The browsers the widgets report on.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaniuseError;

/// Tracked browser, keyed by its caniuse agent id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Browser {
    #[serde(rename = "ie")]
    InternetExplorer,
    #[serde(rename = "chrome")]
    Chrome,
    #[serde(rename = "firefox")]
    Firefox,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "ios_saf")]
    IosSafari,
}

/// Where a browser runs; the grouped widget splits its support flags on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Desktop,
    Mobile,
}

impl Browser {
    pub const ALL: [Browser; 5] = [
        Browser::InternetExplorer,
        Browser::Chrome,
        Browser::Firefox,
        Browser::Android,
        Browser::IosSafari,
    ];

    /// Agent id used as the key in `agents` and in each feature's `stats`.
    pub fn id(self) -> &'static str {
        match self {
            Browser::InternetExplorer => "ie",
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Android => "android",
            Browser::IosSafari => "ios_saf",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Browser::InternetExplorer => "Internet Explorer",
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Android => "Android Browser",
            Browser::IosSafari => "iOS Safari",
        }
    }

    pub fn platform(self) -> Platform {
        match self {
            Browser::InternetExplorer | Browser::Chrome | Browser::Firefox => Platform::Desktop,
            Browser::Android | Browser::IosSafari => Platform::Mobile,
        }
    }

    /// Icon file name relative to the widget's asset root.
    pub fn icon_asset(self) -> &'static str {
        match self {
            Browser::InternetExplorer => "ie-icon-16.png",
            Browser::Chrome => "chrome-icon-16.png",
            Browser::Firefox => "firefox-icon-16.png",
            Browser::Android => "android-browser-icon-16.png",
            Browser::IosSafari => "ios-safari-icon-16.png",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Browser {
    type Err = CaniuseError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Browser::ALL
            .into_iter()
            .find(|browser| browser.id() == id)
            .ok_or_else(|| CaniuseError::Config(format!("untracked browser {:?}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for browser in Browser::ALL {
            assert_eq!(browser.id().parse::<Browser>().unwrap(), browser);
        }
        assert!("opera".parse::<Browser>().is_err());
    }

    #[test]
    fn test_platform_split() {
        let mobile: Vec<_> = Browser::ALL
            .into_iter()
            .filter(|b| b.platform() == Platform::Mobile)
            .collect();
        assert_eq!(mobile, vec![Browser::Android, Browser::IosSafari]);
    }

    #[test]
    fn test_serde_id() {
        assert_eq!(serde_json::to_string(&Browser::IosSafari).unwrap(), "\"ios_saf\"");
        let parsed: Browser = serde_json::from_str("\"ie\"").unwrap();
        assert_eq!(parsed, Browser::InternetExplorer);
    }
}
