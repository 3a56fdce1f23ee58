//! # Rating Enums
//!
//! The ordered enumerations that drive scoring: [`MaturityLevel`] for full
//! assessments, [`QuickCheckValue`] for the ten-question quick check,
//! [`Tier`] / [`AssessmentScope`] for question selection, and
//! [`EffortLevel`] / [`Priority`] for remediation planning.
//!
//! Every enum parses from its snake_case wire name via `FromStr` and fails
//! with a [`ValidationError`] for anything else. Unknown values are never
//! defaulted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// MaturityLevel
// ---------------------------------------------------------------------------

/// How completely a control is implemented.
///
/// ```text
/// Ordering: NotImplemented < Partial < Implemented < NotApplicable
/// Weight:   0              0.5       1             excluded
/// ```
///
/// `NotApplicable` is excluded from both numerator and denominator of its
/// category's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    /// The control does not exist.
    NotImplemented,
    /// The control exists but is incomplete.
    Partial,
    /// The control is fully in place.
    Implemented,
    /// The control does not apply to this organisation.
    NotApplicable,
}

impl MaturityLevel {
    /// Weight of a fully implemented control.
    pub const MAX_WEIGHT: f64 = 1.0;

    /// Scoring weight, or `None` for `NotApplicable`.
    pub fn weight(self) -> Option<f64> {
        match self {
            Self::NotImplemented => Some(0.0),
            Self::Partial => Some(0.5),
            Self::Implemented => Some(Self::MAX_WEIGHT),
            Self::NotApplicable => None,
        }
    }

    /// Wire name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotImplemented => "not_implemented",
            Self::Partial => "partial",
            Self::Implemented => "implemented",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// All levels in ascending order.
    pub fn all() -> &'static [MaturityLevel] {
        &[
            Self::NotImplemented,
            Self::Partial,
            Self::Implemented,
            Self::NotApplicable,
        ]
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaturityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_implemented" | "not-implemented" | "no" => Ok(Self::NotImplemented),
            "partial" | "partially" => Ok(Self::Partial),
            "implemented" | "yes" => Ok(Self::Implemented),
            "not_applicable" | "not-applicable" | "n/a" | "na" => Ok(Self::NotApplicable),
            _ => Err(ValidationError::UnknownMaturityLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// QuickCheckValue
// ---------------------------------------------------------------------------

/// Answer to a quick-check question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickCheckValue {
    /// Fully in place.
    Yes,
    /// Partially in place.
    Partial,
    /// Not in place.
    No,
}

impl QuickCheckValue {
    /// Scoring weight: yes = 1, partial = 0.5, no = 0.
    pub fn weight(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No => 0.0,
        }
    }

    /// Wire name of the value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Partial => "partial",
            Self::No => "no",
        }
    }
}

impl fmt::Display for QuickCheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickCheckValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "partial" => Ok(Self::Partial),
            "no" => Ok(Self::No),
            _ => Err(ValidationError::UnknownQuickCheckValue(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tier / AssessmentScope
// ---------------------------------------------------------------------------

/// Question classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Counts toward both the simplified and the full assessment.
    #[default]
    Core,
    /// Counts toward the full assessment only.
    Advanced,
}

impl Tier {
    /// Wire name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ValidationError::UnknownTier(s.to_string())),
        }
    }
}

/// Which questions an assessment is scored over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentScope {
    /// Simplified assessment: core-tier questions only.
    Core,
    /// Full assessment: every question.
    #[default]
    Full,
}

impl AssessmentScope {
    /// Whether a question of the given tier is scored under this scope.
    pub fn includes(self, tier: Tier) -> bool {
        match self {
            Self::Core => tier == Tier::Core,
            Self::Full => true,
        }
    }

    /// Wire name of the scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for AssessmentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentScope {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "full" => Ok(Self::Full),
            _ => Err(ValidationError::UnknownScope(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// EffortLevel / Priority
// ---------------------------------------------------------------------------

/// Coarse cost/complexity rating of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    /// A few days of work.
    Low,
    /// One to three weeks.
    Medium,
    /// A project in its own right.
    High,
}

impl EffortLevel {
    /// Wire name of the effort level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// All effort levels in ascending order.
    pub fn all() -> &'static [EffortLevel] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffortLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::UnknownEffortLevel(s.to_string())),
        }
    }
}

/// Remediation priority used for roadmap phasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Address first.
    High,
    /// Address after the high-priority items.
    Medium,
    /// Address when capacity allows.
    Low,
}

impl Priority {
    /// Wire name of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}
