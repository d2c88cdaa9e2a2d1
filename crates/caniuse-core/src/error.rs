//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaniuseError {
    /// The payload was absent, `null` or `false`.
    #[error("DATA/unavailable")]
    DataUnavailable,

    #[error("SCHEMA/{0}")]
    Schema(String),

    #[error("PARSE/{0}")]
    Parse(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("RENDER/{0}")]
    Render(String),
}

impl From<serde_json::Error> for CaniuseError {
    fn from(err: serde_json::Error) -> Self {
        CaniuseError::Parse(err.to_string())
    }
}
