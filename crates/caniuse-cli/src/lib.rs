//! caniuse: build a feature summary from a caniuse payload file
//!
//! The binary is a thin wrapper over [`run`]; everything it prints comes
//! back from here as a string so it can be tested without a process.
pub mod logging;

use std::path::{Path, PathBuf};

use caniuse_core::CaniuseError;
use caniuse_out::{render_summary, TemplateRenderer};
use caniuse_summary::{FeatureSummaryBuilder, SummaryConfig, WidgetKind};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::{debug, warn};

/// Exit code for a missing or empty payload
pub const EXIT_DATA_UNAVAILABLE: u8 = 2;

#[derive(Parser, Debug, Clone)]
#[command(name = "caniuse", version, about = "Browser support summaries from caniuse data")]
pub struct Cli {
    /// Path to the caniuse data JSON
    #[arg(long)]
    pub payload: PathBuf,

    /// Search query, e.g. "caniuse css3"
    #[arg(long)]
    pub query: String,

    /// Widget to build; overrides the config file
    #[arg(long)]
    pub widget: Option<WidgetKind>,

    /// YAML widget configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// YAML templates used by `--format text`
    #[arg(long)]
    pub templates: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Debug logging from the caniuse crates
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed summary records
    Json,
    /// Records rendered through the widget templates
    Text,
}

/// Read the payload file. A missing or blank file is reported the same way
/// as an absent fetch result.
pub fn read_payload(path: &Path) -> Result<Option<Value>, CaniuseError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "payload not readable");
            return Ok(None);
        }
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

pub fn load_config(cli: &Cli) -> Result<SummaryConfig, CaniuseError> {
    let mut config = match &cli.config {
        Some(path) => SummaryConfig::load(path)?,
        None => SummaryConfig::default(),
    };
    if let Some(widget) = cli.widget {
        config.widget = widget;
    }
    Ok(config)
}

/// Build the summary and format it for stdout
pub fn run(cli: &Cli) -> Result<String, CaniuseError> {
    let config = load_config(cli)?;
    let payload = read_payload(&cli.payload)?;
    let builder = FeatureSummaryBuilder::new(config)?;
    let summary = builder.build(payload.as_ref(), &cli.query)?;
    debug!(records = summary.records.len(), format = ?cli.format, "summary ready");

    match cli.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            let renderer = match &cli.templates {
                Some(path) => TemplateRenderer::load(path)?,
                None => TemplateRenderer::with_defaults()?,
            };
            Ok(render_summary(&summary, &renderer)?.to_text())
        }
    }
}

/// Process exit code for a failed run
pub fn exit_code(error: &CaniuseError) -> u8 {
    match error {
        CaniuseError::DataUnavailable => EXIT_DATA_UNAVAILABLE,
        _ => 1,
    }
}
