//! Error types for the boundaries around the pure text functions.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum WordplayError {
    /// A caller broke a precondition, e.g. passed a null pointer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordplayError>;
