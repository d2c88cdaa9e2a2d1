//! Data Model: ApiPayload, Feature, Agent, VersionSupportTable
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::browser::Browser;
use crate::error::CaniuseError;
use crate::support::SupportStatus;

/// The pre-fetched caniuse payload: `{statuses, data, agents}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPayload {
    /// Status code (ex: "rec", "cr") to human label
    pub statuses: HashMap<String, String>,
    /// Feature key to raw feature object, in payload order
    pub data: Map<String, Value>,
    /// Agent id to agent metadata
    pub agents: HashMap<String, Agent>,
}

/// Agent metadata; only the current version is read, other keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub current_version: Option<String>,
}

impl ApiPayload {
    /// Interpret an already-parsed JSON value as a payload.
    ///
    /// An absent or falsy value means the fetch produced nothing.
    pub fn from_value(value: Option<&Value>) -> Result<Self, CaniuseError> {
        let value = match value {
            None => return Err(CaniuseError::DataUnavailable),
            Some(v) if is_falsy(v) => return Err(CaniuseError::DataUnavailable),
            Some(v) => v,
        };

        if !value.is_object() {
            return Err(CaniuseError::Schema("payload is not an object".to_string()));
        }

        ApiPayload::deserialize(value).map_err(|e| CaniuseError::Schema(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, CaniuseError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(Some(&value))
    }

    /// Human label for a status code, when the payload knows it.
    pub fn status_label(&self, code: &str) -> Option<&str> {
        self.statuses.get(code).map(String::as_str)
    }

    pub fn current_version(&self, browser: Browser) -> Result<&str, CaniuseError> {
        self.agents
            .get(browser.id())
            .and_then(|agent| agent.current_version.as_deref())
            .ok_or_else(|| {
                CaniuseError::Schema(format!("agent {} has no current_version", browser.id()))
            })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// One feature entry from `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub categories: Vec<String>,
    pub status: String,
    pub usage_perc_y: f64,
    pub usage_perc_a: f64,
    /// Agent id to raw support table; parsed on demand per tracked browser
    pub stats: Map<String, Value>,
}

impl Feature {
    pub fn from_value(value: &Value) -> Result<Self, CaniuseError> {
        Feature::deserialize(value).map_err(|e| CaniuseError::Schema(e.to_string()))
    }

    /// Parse the support table for one browser.
    pub fn table(&self, browser: Browser) -> Result<VersionSupportTable, CaniuseError> {
        let raw = self
            .stats
            .get(browser.id())
            .ok_or_else(|| CaniuseError::Schema(format!("no stats for {}", browser.id())))?;
        VersionSupportTable::deserialize(raw).map_err(|e| {
            CaniuseError::Parse(format!("stats for {}: {}", browser.id(), e))
        })
    }
}

/// Version label to support status, in table order.
///
/// Keys are kept verbatim; hyphenated range keys such as `"10.1-10.3"` are
/// expanded later by the range compressor, not here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct VersionSupportTable {
    entries: Vec<(String, SupportStatus)>,
}

impl VersionSupportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(label, cell)` pairs, parsing each cell.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CaniuseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (label, cell) in pairs {
            table.insert(label, cell.as_ref().parse()?);
        }
        Ok(table)
    }

    /// Insert or replace; a replaced label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, status: SupportStatus) {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((label, status)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&SupportStatus> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, status)| status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SupportStatus)> {
        self.entries.iter().map(|(label, status)| (label.as_str(), status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for VersionSupportTable {
    type Error = CaniuseError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (label, cell) in map {
            let cell = cell.as_str().ok_or_else(|| {
                CaniuseError::Parse(format!("support cell for {:?} is not a string", label))
            })?;
            table.insert(label, cell.parse()?);
        }
        Ok(table)
    }
}
