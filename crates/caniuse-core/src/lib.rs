//! caniuse-core: payload data model, support codes and tracked browsers.
//!
//! Everything here is plain data. The range compressor lives in
//! `caniuse-range`, the per-feature shaping in `caniuse-summary`.

pub mod browser;
pub mod data_model;
pub mod error;
pub mod support;

pub use browser::{Browser, Platform};
pub use data_model::{Agent, ApiPayload, Feature, VersionSupportTable};
pub use error::CaniuseError;
pub use support::{SupportCode, SupportStatus};

/// Source attribution shown under every widget.
pub const SOURCE_NAME: &str = "caniuse.com";
pub const SOURCE_URL: &str = "http://caniuse.com/";
