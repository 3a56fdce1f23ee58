//! # Traffic Light Classification
//!
//! Three-band classification of a 0–100 percentage score. The thresholds
//! are fixed and lower-inclusive:
//!
//! ```text
//!   0 ..  39  → Red
//!  40 ..  69  → Yellow
//!  70 .. 100  → Green
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::Priority;

/// Lower bound (inclusive) of the yellow band.
pub const YELLOW_THRESHOLD: u8 = 40;

/// Lower bound (inclusive) of the green band.
pub const GREEN_THRESHOLD: u8 = 70;

/// Red/yellow/green rating of a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLight {
    /// Below 40 %.
    Red,
    /// 40 % up to, but excluding, 70 %.
    Yellow,
    /// 70 % and above.
    Green,
}

impl TrafficLight {
    /// Classify a percentage. Boundary values belong to the upper band.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= GREEN_THRESHOLD {
            Self::Green
        } else if percentage >= YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    /// Remediation priority implied by this rating.
    pub fn implied_priority(self) -> Priority {
        match self {
            Self::Red => Priority::High,
            Self::Yellow => Priority::Medium,
            Self::Green => Priority::Low,
        }
    }

    /// Wire name of the rating.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `part` as an integer percentage of `whole`.
///
/// Scales before dividing, so `11.5 / 20` is exactly 57.5 and rounds to 58.
/// Rounds half away from zero and clamps to `0..=100`. A zero or
/// non-finite denominator gives 0.
pub fn percentage_of(part: f64, whole: f64) -> u8 {
    let scaled = (100.0 * part) / whole;
    if !scaled.is_finite() || whole <= 0.0 {
        return 0;
    }
    scaled.round().clamp(0.0, 100.0) as u8
}
