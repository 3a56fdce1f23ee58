//! Aggregation errors.

use thiserror::Error;

/// Errors from cross-regulation aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynergyError {
    /// A result names a regulation the registry does not know.
    #[error("regulation {0} is not registered")]
    UnknownRegulation(String),

    /// The same regulation was passed twice.
    #[error("regulation {0} appears more than once")]
    DuplicateRegulation(String),
}
