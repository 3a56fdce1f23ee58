//! # Company Size
//!
//! Headcount used by the cost engine to scale day estimates. Validated
//! at construction: a company has at least one employee.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Number of employees of the assessed organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct CompanySize(u32);

impl CompanySize {
    /// The reference company the base day tables are calibrated for.
    pub const REFERENCE: CompanySize = CompanySize(100);

    /// Create a company size from a headcount.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NonPositiveCompanySize`] for zero or
    /// negative headcounts.
    pub fn new(employees: i64) -> Result<Self, InvalidInputError> {
        if employees <= 0 {
            return Err(InvalidInputError::NonPositiveCompanySize(employees));
        }
        let employees = u32::try_from(employees).unwrap_or(u32::MAX);
        Ok(Self(employees))
    }

    /// Headcount.
    pub fn employees(self) -> u32 {
        self.0
    }
}

impl Default for CompanySize {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl TryFrom<i64> for CompanySize {
    type Error = InvalidInputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompanySize> for u32 {
    fn from(size: CompanySize) -> Self {
        size.0
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} employees", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_rejected() {
        assert_eq!(
            CompanySize::new(0).unwrap_err(),
            InvalidInputError::NonPositiveCompanySize(0)
        );
        assert!(CompanySize::new(-10).is_err());
    }

    #[test]
    fn huge_headcount_saturates() {
        let size = CompanySize::new(i64::MAX).unwrap();
        assert_eq!(size.employees(), u32::MAX);
    }

    #[test]
    fn default_is_reference_company() {
        assert_eq!(CompanySize::default().employees(), 100);
    }

    #[test]
    fn deserialization_rejects_zero() {
        let bad: Result<CompanySize, _> = serde_json::from_str("0");
        assert!(bad.is_err());
        let ok: CompanySize = serde_json::from_str("250").unwrap();
        assert_eq!(ok.employees(), 250);
    }
}
