//! State and persistence errors.

use thiserror::Error;

use regcheck_core::ValidationError;

/// Errors from answer stores and their storage backends.
#[derive(Error, Debug)]
pub enum StateError {
    /// The storage backend failed to read or write a blob.
    #[error("storage I/O failed for {key}: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    /// A persisted blob is not valid JSON of the expected shape.
    #[error("persisted state {key} is corrupted: {source}")]
    Corrupted {
        key: String,
        source: serde_json::Error,
    },

    /// A persisted blob was written by an incompatible format version.
    #[error("persisted state {key} has unsupported version {version}")]
    UnsupportedVersion { key: String, version: u32 },

    /// A storage key contains characters a backend cannot store.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// A persisted or submitted answer failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts() {
        let err: StateError = ValidationError::UnknownMaturityLevel("x".into()).into();
        assert!(matches!(err, StateError::Validation(_)));
        assert!(err.to_string().contains("unknown maturity level"));
    }

    #[test]
    fn io_names_key() {
        let err = StateError::Io {
            key: "nis2-assessment-storage".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("nis2-assessment-storage"));
    }
}
