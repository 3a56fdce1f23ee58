//! Pack-specific error types.
//!
//! Errors carry the file path where one exists so that a broken pack can
//! be located without guesswork.

use std::path::PathBuf;

use thiserror::Error;

use regcheck_core::{RegistryError, ValidationError};

/// Errors that can occur while loading or registering packs.
#[derive(Debug, Error)]
pub enum PackError {
    /// YAML parsing failed for a file on disk.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed for a file on disk.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// YAML parsing failed for an embedded or in-memory document.
    #[error("failed to parse pack {name}: {source}")]
    YamlParseStr {
        name: String,
        source: serde_yaml::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Registration was rejected.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A crosswalk table references an unknown regulation or category.
    #[error("invalid crosswalk: {0}")]
    InvalidCrosswalk(String),

    /// Validation error from a domain primitive.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
