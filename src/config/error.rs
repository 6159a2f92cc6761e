//! Errors raised while loading `igdoc.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid config file `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    /// A config file named on the command line doesn't exist.
    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("invalid [{field}]: {reason}")]
    Validation { field: &'static str, reason: String },
}
