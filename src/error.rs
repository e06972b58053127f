//! Error types for session loading and history export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Crate-wide error type.
///
/// The estimator itself never fails; these cover the layers around it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read session file \"{}\": {source}", .path.display())]
    ReadSession {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid session TOML: {0}")]
    ParseSession(#[from] toml::de::Error),

    #[error("unknown preset \"{name}\", available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("unknown tariff plan \"{0}\", expected Residential, Commercial or Industrial")]
    UnknownTariff(String),

    #[error("session has {} invalid field(s): {}", .0.len(), join_errors(.0))]
    InvalidSession(Vec<ConfigError>),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
