//! Errors raised while reading or checking a Hanoi configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value that parsed but is out of bounds for the puzzle.
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("no home directory, cannot locate the user config file")]
    NoHomeDir,
}
