//! Support codes as they appear in caniuse stats tables.
//!
//! A table cell is one primary code, optionally followed by extra flag codes
//! and footnote markers, e.g. `"y"`, `"a x"`, `"y #1"`, `"p d #2 #3"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaniuseError;

/// Single-letter classification of a browser version's support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportCode {
    /// (Y)es, supported by default
    #[serde(rename = "y")]
    Yes,
    /// (A)lmost supported, aka partial support
    #[serde(rename = "a")]
    Almost,
    /// (N)o support, or disabled by default
    #[serde(rename = "n")]
    No,
    /// No support, but has a (P)olyfill
    #[serde(rename = "p")]
    Polyfill,
    /// Support (u)nknown
    #[serde(rename = "u")]
    Unknown,
    /// Requires prefi(x) to work
    #[serde(rename = "x")]
    Prefix,
    /// (D)isabled by default, needs a flag
    #[serde(rename = "d")]
    Disabled,
}

impl SupportCode {
    pub const ALL: [SupportCode; 7] = [
        SupportCode::Yes,
        SupportCode::Almost,
        SupportCode::No,
        SupportCode::Polyfill,
        SupportCode::Unknown,
        SupportCode::Prefix,
        SupportCode::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SupportCode::Yes => "y",
            SupportCode::Almost => "a",
            SupportCode::No => "n",
            SupportCode::Polyfill => "p",
            SupportCode::Unknown => "u",
            SupportCode::Prefix => "x",
            SupportCode::Disabled => "d",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == token)
    }
}

impl fmt::Display for SupportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed stats cell. The raw text is kept because matching is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupportStatus {
    raw: String,
    code: SupportCode,
    flags: Vec<SupportCode>,
    notes: Vec<u32>,
}

impl SupportStatus {
    pub fn code(&self) -> SupportCode {
        self.code
    }

    pub fn flags(&self) -> &[SupportCode] {
        &self.flags
    }

    pub fn notes(&self) -> &[u32] {
        &self.notes
    }

    /// True only when the cell is exactly `target` with nothing attached.
    ///
    /// A footnote or flag excludes the cell: `"y #1"` does not match `y`.
    pub fn is_exactly(&self, target: SupportCode) -> bool {
        self.raw == target.as_str()
    }
}

impl FromStr for SupportStatus {
    type Err = CaniuseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut tokens = raw.split_whitespace();
        let first = tokens
            .next()
            .ok_or_else(|| CaniuseError::Parse("empty support cell".to_string()))?;
        let code = SupportCode::from_token(first)
            .ok_or_else(|| CaniuseError::Parse(format!("unknown support code {:?}", first)))?;

        let mut flags = Vec::new();
        let mut notes = Vec::new();
        for token in tokens {
            if let Some(number) = token.strip_prefix('#') {
                let note = number
                    .parse::<u32>()
                    .map_err(|_| CaniuseError::Parse(format!("bad note marker {:?}", token)))?;
                notes.push(note);
            } else if let Some(flag) = SupportCode::from_token(token) {
                flags.push(flag);
            } else {
                return Err(CaniuseError::Parse(format!(
                    "unknown token {:?} in support cell {:?}",
                    token, raw
                )));
            }
        }

        Ok(SupportStatus {
            raw: raw.to_string(),
            code,
            flags,
            notes,
        })
    }
}

impl TryFrom<String> for SupportStatus {
    type Error = CaniuseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<SupportStatus> for String {
    fn from(status: SupportStatus) -> Self {
        status.raw
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
