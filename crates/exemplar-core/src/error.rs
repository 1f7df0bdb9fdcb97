//! Error Types
//!
//! Failures surfaced by the simulation core, configuration loading and
//! report output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by pools, the sampler and the update rules.
///
/// Parameters are checked before any iteration runs, so a failed call never
/// leaves partially updated pools behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExemplarError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ExemplarError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ExemplarError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors that can occur while writing or reading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
