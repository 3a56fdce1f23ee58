//! # Error Hierarchy
//!
//! Structured error types for the whole workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The only expected failure mode of the scoring, cost and aggregation
//! functions is invalid input. Every variant carries the offending value so
//! an operator can see exactly which answer or table entry was rejected.

use thiserror::Error;

/// Validation errors for identifiers, enum values and answers.
///
/// Raised at the point of parsing or score computation. A silently wrong
/// score is worse than a loud failure, so nothing here is defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An identifier was empty or whitespace-only.
    #[error("invalid {kind} identifier: must be non-empty")]
    EmptyIdentifier {
        /// Which identifier namespace (regulation, category, ...).
        kind: &'static str,
    },

    /// A maturity level string was not recognized.
    #[error("unknown maturity level: {0:?} (expected not_implemented, partial, implemented, not_applicable)")]
    UnknownMaturityLevel(String),

    /// A quick-check value string was not recognized.
    #[error("unknown quick-check value: {0:?} (expected yes, partial, no)")]
    UnknownQuickCheckValue(String),

    /// A tier string was not recognized.
    #[error("unknown tier: {0:?} (expected core, advanced)")]
    UnknownTier(String),

    /// An assessment scope string was not recognized.
    #[error("unknown assessment scope: {0:?} (expected core, full)")]
    UnknownScope(String),

    /// An effort level string was not recognized.
    #[error("unknown effort level: {0:?} (expected low, medium, high)")]
    UnknownEffortLevel(String),

    /// A priority string was not recognized.
    #[error("unknown priority: {0:?} (expected high, medium, low)")]
    UnknownPriority(String),

    /// A locale string was not recognized.
    #[error("unknown locale: {0:?} (expected de, en)")]
    UnknownLocale(String),

    /// An answer referenced a question that does not exist in the regulation.
    #[error("answer references unknown question {question} in regulation {regulation}")]
    UnknownQuestion {
        /// Regulation the answer set belongs to.
        regulation: String,
        /// The unknown question id.
        question: String,
    },

    /// An answer's category disagrees with the question's declared category.
    #[error("answer for question {question} names category {actual}, but the question belongs to {expected}")]
    CategoryMismatch {
        /// The question id.
        question: String,
        /// Category declared by the question.
        expected: String,
        /// Category carried by the answer.
        actual: String,
    },

    /// Timestamp string is not valid UTC ISO 8601.
    #[error("invalid timestamp: {value:?} ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A quick-check answer referenced a question outside the quick-check subset.
    #[error("quick-check answer references unknown quick-check question {question} in regulation {regulation}")]
    UnknownQuickCheckQuestion {
        /// Regulation the quick check belongs to.
        regulation: String,
        /// The unknown quick-check question id.
        question: String,
    },
}

/// Numeric inputs rejected by the cost engine.
///
/// Cost estimates must never silently compute negative or NaN ranges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Company size must be at least one employee.
    #[error("company size must be positive, got {0}")]
    NonPositiveCompanySize(i64),

    /// An effort day range is negative or inverted.
    #[error("invalid day range for {effort} effort: {min}..{max}")]
    InvalidDayRange {
        /// Effort level the range belongs to.
        effort: String,
        /// Lower bound in days.
        min: f64,
        /// Upper bound in days.
        max: f64,
    },

    /// A size-scaling exponent is not a finite positive number.
    #[error("size exponent must be finite and positive, got {0}")]
    InvalidSizeExponent(f64),
}

/// Errors raised by the regulation registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A configuration with this regulation id is already registered.
    #[error("regulation {0} is already registered")]
    DuplicateRegulation(String),

    /// A configuration failed structural validation at registration.
    #[error("invalid configuration for regulation {regulation}: {reason}")]
    InvalidConfig {
        /// The regulation id of the rejected config.
        regulation: String,
        /// Human-readable reason for the rejection.
        reason: String,
    },
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Percentages and amounts must be integers.
    #[error("float values are not permitted in canonical representations; use integers: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
