use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by list mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A raw collection position was outside the accepted range.
    #[error("index {index} is out of range for a list of {len} items")]
    InvalidIndex { index: usize, len: usize },
}

/// Errors returned while loading a [`crate::config::ListConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
