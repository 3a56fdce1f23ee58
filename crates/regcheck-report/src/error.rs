//! Report assembly errors.

use thiserror::Error;

use regcheck_core::{CanonicalizationError, InvalidInputError};
use regcheck_synergy::SynergyError;

/// Errors from building a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report body could not be canonicalized for its digest.
    #[error("report canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The cost section received invalid numeric input.
    #[error("invalid cost input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Multi-regulation aggregation failed.
    #[error(transparent)]
    Synergy(#[from] SynergyError),

    /// The result does not belong to the config it is reported against.
    #[error("result for {result} cannot be reported against config {config}")]
    RegulationMismatch { result: String, config: String },
}
