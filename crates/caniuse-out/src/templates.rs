//! Template loading and management for CANIUSE-OUT.
//!
//! Templates live in a YAML file with:
//! - A format version
//! - Named Handlebars templates, `<widget>.content` and `<widget>.footer`

use caniuse_core::CaniuseError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Templates shipped with the crate.
pub const DEFAULT_TEMPLATES: &str = include_str!("../templates/caniuse.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CaniuseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaniuseError::Config(format!("failed to read templates file {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, CaniuseError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CaniuseError::Config(format!("failed to parse templates YAML: {}", e)))
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
