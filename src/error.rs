//! Error types for the portfolio catalog
//!
//! Lookups that miss are ordinary values (`NotFound`), never panics.
//! Everything that can go wrong while loading the data set or the config
//! file is reported once at startup.

use std::path::PathBuf;
use thiserror::Error;

/// A title or external identifier matched no project in the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no project matches {identifier:?}")]
pub struct NotFound {
    /// The identifier as it was requested (encoded or plain)
    pub identifier: String,
}

impl NotFound {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Failure to percent-decode an external identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits
    #[error("invalid percent escape at byte {position}")]
    InvalidEscape { position: usize },

    /// The decoded bytes are not UTF-8
    #[error("decoded identifier is not valid UTF-8")]
    InvalidUtf8,
}

/// Failure to build the project store from a data set
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data set: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project at position {position} has an empty title")]
    EmptyTitle { position: usize },

    #[error("duplicate project title {title:?} at positions {first} and {second}")]
    DuplicateTitle {
        title: String,
        first: usize,
        second: usize,
    },
}

/// Failure to read or parse the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
