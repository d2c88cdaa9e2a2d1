//! CANIUSE-OUT: display records to text
//!
//! Renders a [`FeatureSummary`] with the widget's `content` and `footer`
//! templates. Layout belongs to the templates; this crate only feeds them.
//!
//! # Example
//!
//! ```ignore
//! use caniuse_out::{render_summary, TemplateRenderer};
//!
//! let renderer = TemplateRenderer::with_defaults()?;
//! let rendered = render_summary(&summary, &renderer)?;
//! println!("{}", rendered.to_text());
//! ```

pub mod renderer;
pub mod templates;

pub use renderer::TemplateRenderer;
pub use templates::{Template, TemplatesFile, DEFAULT_TEMPLATES};

use caniuse_core::CaniuseError;
use caniuse_summary::{FeatureSummary, WidgetKind};
use serde::Serialize;
use tracing::debug;

/// One record's rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRecord {
    pub key: String,
    pub title: String,
    pub content: String,
    pub footer: String,
}

/// A whole rendered widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSummary {
    pub widget: WidgetKind,
    pub name: String,
    pub source_name: String,
    pub source_url: String,
    pub records: Vec<RenderedRecord>,
}

impl RenderedSummary {
    /// Cards separated by blank lines, with the source attribution last.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(record.content.trim_end());
            out.push('\n');
            out.push_str(record.footer.trim_end());
            out.push_str("\n\n");
        }
        out.push_str(&format!("More at {} ({})\n", self.source_name, self.source_url));
        out
    }
}

pub fn content_template(widget: WidgetKind) -> String {
    format!("{}.content", widget.id())
}

pub fn footer_template(widget: WidgetKind) -> String {
    format!("{}.footer", widget.id())
}

/// Render every record of a summary with its widget's templates
pub fn render_summary(
    summary: &FeatureSummary,
    renderer: &TemplateRenderer,
) -> Result<RenderedSummary, CaniuseError> {
    let content = content_template(summary.widget);
    let footer = footer_template(summary.widget);
    for name in [&content, &footer] {
        if !renderer.has_template(name) {
            return Err(CaniuseError::Render(format!("missing template {}", name)));
        }
    }

    let records = summary
        .records
        .iter()
        .map(|record| {
            Ok(RenderedRecord {
                key: record.key.clone(),
                title: record.title.clone(),
                content: renderer.render(&content, record)?,
                footer: renderer.render(&footer, record)?,
            })
        })
        .collect::<Result<Vec<_>, CaniuseError>>()?;

    debug!(widget = %summary.widget, records = records.len(), "rendered summary");

    Ok(RenderedSummary {
        widget: summary.widget,
        name: summary.name.clone(),
        source_name: summary.source_name.clone(),
        source_url: summary.source_url.clone(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_names() {
        assert_eq!(content_template(WidgetKind::CanIuse), "can_iuse.content");
        assert_eq!(footer_template(WidgetKind::CaniuseLists), "caniuse_lists.footer");
    }

    #[test]
    fn test_text_layout() {
        let rendered = RenderedSummary {
            widget: WidgetKind::CanIuse,
            name: "Can I Use".to_string(),
            source_name: "caniuse.com".to_string(),
            source_url: "http://caniuse.com/".to_string(),
            records: vec![RenderedRecord {
                key: "svg".to_string(),
                title: "SVG".to_string(),
                content: "SVG\nbody\n".to_string(),
                footer: "footer".to_string(),
            }],
        };
        assert_eq!(
            rendered.to_text(),
            "SVG\nbody\nfooter\n\nMore at caniuse.com (http://caniuse.com/)\n"
        );
    }
}
