//! Template rendering for CANIUSE-OUT.
//!
//! Uses Handlebars with HTML escaping turned off (output is plain text) and
//! custom helpers:
//! - usage: Format a usage percentage (85.5 -> "85.5%")
//! - join: Join array with separator
//! - default: Fallback for null values

use caniuse_core::CaniuseError;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde::Serialize;

use crate::templates::{TemplatesFile, DEFAULT_TEMPLATES};

/// Compiled renderer with registered helpers
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, CaniuseError> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("usage", Box::new(UsageHelper));
        handlebars.register_helper("join", Box::new(JoinHelper));
        handlebars.register_helper("default", Box::new(DefaultHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| CaniuseError::Render(format!("template {}: {}", name, e)))?;
        }

        Ok(TemplateRenderer { handlebars })
    }

    /// Renderer over the shipped templates
    pub fn with_defaults() -> Result<Self, CaniuseError> {
        Self::new(TemplatesFile::from_yaml(DEFAULT_TEMPLATES)?)
    }

    /// Load from a file path
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, CaniuseError> {
        Self::new(TemplatesFile::load(path)?)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a named template with data
    pub fn render<T: Serialize>(
        &self,
        template_name: &str,
        data: &T,
    ) -> Result<String, CaniuseError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| CaniuseError::Render(format!("{}: {}", template_name, e)))
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

/// Format a usage percentage with at most two decimals
struct UsageHelper;

impl HelperDef for UsageHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).and_then(|v| v.value().as_f64()).unwrap_or(0.0);
        out.write(&format!("{}%", format_usage(value)))?;
        Ok(())
    }
}

fn format_usage(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let array = h.param(0).and_then(|v| v.value().as_array());

        let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");

        if let Some(arr) = array {
            let strings: Vec<String> = arr
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            out.write(&strings.join(separator))?;
        }

        Ok(())
    }
}

/// Default value helper
struct DefaultHelper;

impl HelperDef for DefaultHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).map(|v| v.value());
        let default = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

        match value {
            Some(v) if !v.is_null() => match v.as_str() {
                Some(s) => out.write(s)?,
                None => out.write(&v.to_string())?,
            },
            _ => out.write(default)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_templates() -> TemplatesFile {
        TemplatesFile::from_yaml(
            r#"
version: "1.0"
templates:
  usage:
    description: Usage display
    template: "Usage: {{usage usage_y}}"
  list:
    description: Categories
    template: "{{join categories \" / \"}}"
  status:
    description: Status with fallback
    template: "{{default status \"Unknown\"}}"
  raw:
    description: No escaping
    template: "{{title}}"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_usage_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        assert_eq!(renderer.render("usage", &json!({ "usage_y": 85.5 })).unwrap(), "Usage: 85.5%");
        assert_eq!(renderer.render("usage", &json!({ "usage_y": 10.0 })).unwrap(), "Usage: 10%");
        assert_eq!(
            renderer.render("usage", &json!({ "usage_y": 12.3456 })).unwrap(),
            "Usage: 12.35%"
        );
    }

    #[test]
    fn test_join_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("list", &json!({ "categories": ["CSS3", "HTML5"] })).unwrap();
        assert_eq!(result, "CSS3 / HTML5");
    }

    #[test]
    fn test_default_helper() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        assert_eq!(renderer.render("status", &json!({ "status": null })).unwrap(), "Unknown");
        assert_eq!(
            renderer.render("status", &json!({ "status": "W3C Recommendation" })).unwrap(),
            "W3C Recommendation"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        let result = renderer.render("raw", &json!({ "title": "<video> & <audio>" })).unwrap();
        assert_eq!(result, "<video> & <audio>");
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let renderer = TemplateRenderer::new(test_templates()).unwrap();
        assert!(matches!(renderer.render("missing", &json!({})), Err(CaniuseError::Render(_))));
    }

    #[test]
    fn test_bad_template_rejected() {
        let templates = TemplatesFile::from_yaml(
            r#"
version: "1.0"
templates:
  broken:
    description: Unclosed block
    template: "{{#if x}}never closed"
"#,
        )
        .unwrap();
        assert!(TemplateRenderer::new(templates).is_err());
    }

    #[test]
    fn test_registers_every_template() {
        let renderer = TemplateRenderer::with_defaults().unwrap();
        let shipped = TemplatesFile::from_yaml(DEFAULT_TEMPLATES).unwrap();
        for name in shipped.list_templates() {
            assert!(renderer.has_template(name), "{}", name);
        }
        assert!(!renderer.has_template("can_iuse.header"));
    }

    #[test]
    fn test_format_usage() {
        assert_eq!(format_usage(0.0), "0");
        assert_eq!(format_usage(93.1), "93.1");
    }
}
