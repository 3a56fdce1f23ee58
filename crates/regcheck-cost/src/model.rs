//! # Cost Model
//!
//! Turns an effort level and a company size into a EUR range.
//!
//! ## Model
//!
//! Day tables are calibrated for a reference company of 100 employees.
//! Day counts scale by the size factor
//!
//! ```text
//! factor = max(0.3, (employees / 100) ^ exponent)
//! ```
//!
//! which is monotonic and sub-linear for the default exponent of 0.6. The
//! lower bound prices the scaled minimum days at the internal rate, the
//! upper bound prices the scaled maximum days at the external rate. Both
//! are rounded to the nearest €100. Every checklist item then adds a fixed
//! amount to both bounds.

use serde::{Deserialize, Serialize};

use regcheck_core::{CompanySize, EffortLevel, InvalidInputError};
use regcheck_pack::{DayRange, EffortDays, RegulationConfig};

/// Headcount the day tables are calibrated for.
pub const REFERENCE_EMPLOYEES: f64 = 100.0;

/// Internal labour, EUR per person-day.
pub const INTERNAL_DAY_RATE_EUR: f64 = 500.0;

/// External consultancy, EUR per person-day.
pub const EXTERNAL_DAY_RATE_EUR: f64 = 1_300.0;

/// Flat surcharge per checklist item, EUR.
pub const CHECKLIST_ITEM_EUR: u64 = 150;

pub const DEFAULT_SIZE_EXPONENT: f64 = 0.6;

/// Lower clamp of the size factor.
pub const MIN_SIZE_FACTOR: f64 = 0.3;

/// Cost bounds are rounded to multiples of this.
pub const ROUNDING_STEP_EUR: f64 = 100.0;

/// Base day table used unless a regulation overrides it.
pub const DEFAULT_EFFORT_DAYS: EffortDays = EffortDays {
    low: DayRange::new(2.0, 5.0),
    medium: DayRange::new(5.0, 15.0),
    high: DayRange::new(15.0, 40.0),
};

/// Inclusive EUR range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub min: u64,
    pub max: u64,
}

impl CostEstimate {
    pub const ZERO: CostEstimate = CostEstimate { min: 0, max: 0 };

    /// Component-wise sum, saturating.
    pub fn saturating_add(self, other: CostEstimate) -> CostEstimate {
        CostEstimate {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }
}

impl std::iter::Sum for CostEstimate {
    fn sum<I: Iterator<Item = CostEstimate>>(iter: I) -> Self {
        iter.fold(CostEstimate::ZERO, CostEstimate::saturating_add)
    }
}

/// Scaled person-days, in tenths of a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledDays {
    pub min_tenths: u32,
    pub max_tenths: u32,
}

/// Validated cost parameters of one regulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    effort_days: EffortDays,
    size_exponent: f64,
    internal_rate: f64,
    external_rate: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            effort_days: DEFAULT_EFFORT_DAYS,
            size_exponent: DEFAULT_SIZE_EXPONENT,
            internal_rate: INTERNAL_DAY_RATE_EUR,
            external_rate: EXTERNAL_DAY_RATE_EUR,
        }
    }
}

impl CostModel {
    /// Build a model from a day table and a scaling exponent.
    ///
    /// # Errors
    ///
    /// Rejects negative, inverted or non-finite day ranges and
    /// non-positive or non-finite exponents.
    pub fn new(effort_days: EffortDays, size_exponent: f64) -> Result<Self, InvalidInputError> {
        for effort in EffortLevel::all() {
            let range = effort_days.range(*effort);
            if !(range.min >= 0.0 && range.min <= range.max && range.max.is_finite()) {
                return Err(InvalidInputError::InvalidDayRange {
                    effort: effort.as_str().to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if !size_exponent.is_finite() || size_exponent <= 0.0 {
            return Err(InvalidInputError::InvalidSizeExponent(size_exponent));
        }
        Ok(Self {
            effort_days,
            size_exponent,
            ..Self::default()
        })
    }

    /// The model of a regulation: defaults with its override applied.
    pub fn for_regulation(config: &RegulationConfig) -> Result<Self, InvalidInputError> {
        let overrides = config.cost_model.unwrap_or_default();
        Self::new(
            overrides.effort_days.unwrap_or(DEFAULT_EFFORT_DAYS),
            overrides.size_exponent.unwrap_or(DEFAULT_SIZE_EXPONENT),
        )
    }

    pub fn effort_days(&self) -> &EffortDays {
        &self.effort_days
    }

    pub fn size_exponent(&self) -> f64 {
        self.size_exponent
    }

    /// Multiplier applied to the reference day table.
    pub fn size_factor(&self, size: CompanySize) -> f64 {
        let relative = f64::from(size.employees()) / REFERENCE_EMPLOYEES;
        relative.powf(self.size_exponent).max(MIN_SIZE_FACTOR)
    }

    /// Day range of `effort` scaled to `size`.
    pub fn scaled_days(&self, effort: EffortLevel, size: CompanySize) -> ScaledDays {
        let range = self.effort_days.range(effort);
        let factor = self.size_factor(size);
        ScaledDays {
            min_tenths: to_tenths(range.min * factor),
            max_tenths: to_tenths(range.max * factor),
        }
    }

    /// EUR range for one piece of work.
    pub fn estimate(
        &self,
        effort: EffortLevel,
        checklist_items: usize,
        size: CompanySize,
    ) -> CostEstimate {
        let range = self.effort_days.range(effort);
        let factor = self.size_factor(size);
        let surcharge = CHECKLIST_ITEM_EUR.saturating_mul(checklist_items as u64);
        CostEstimate {
            min: round_eur(range.min * factor * self.internal_rate).saturating_add(surcharge),
            max: round_eur(range.max * factor * self.external_rate).saturating_add(surcharge),
        }
    }
}

fn round_eur(amount: f64) -> u64 {
    ((amount / ROUNDING_STEP_EUR).round().max(0.0) as u64).saturating_mul(ROUNDING_STEP_EUR as u64)
}

fn to_tenths(days: f64) -> u32 {
    (days * 10.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use regcheck_pack::RegulationRegistry;
    use regcheck_core::RegulationId;

    fn size(n: i64) -> CompanySize {
        CompanySize::new(n).unwrap()
    }

    #[test]
    fn reference_company_uses_table_directly() {
        let model = CostModel::default();
        assert_eq!(model.size_factor(size(100)), 1.0);
        assert_eq!(
            model.estimate(EffortLevel::Low, 0, size(100)),
            CostEstimate { min: 1_000, max: 6_500 }
        );
        assert_eq!(
            model.estimate(EffortLevel::High, 0, size(100)),
            CostEstimate { min: 7_500, max: 52_000 }
        );
    }

    #[test]
    fn checklist_items_add_to_both_bounds() {
        let model = CostModel::default();
        assert_eq!(
            model.estimate(EffortLevel::Low, 2, size(100)),
            CostEstimate { min: 1_300, max: 6_800 }
        );
    }

    #[test]
    fn larger_company_scales_sublinearly() {
        let model = CostModel::default();
        let big = model.estimate(EffortLevel::Medium, 0, size(1_000));
        assert_eq!(big, CostEstimate { min: 10_000, max: 77_600 });
        let factor = model.size_factor(size(1_000));
        assert!(factor > 1.0 && factor < 10.0);
    }

    #[test]
    fn tiny_company_is_clamped() {
        let model = CostModel::default();
        assert_eq!(model.size_factor(size(1)), MIN_SIZE_FACTOR);
        assert_eq!(model.size_factor(size(5)), MIN_SIZE_FACTOR);
    }

    #[test]
    fn nis2_override_table_applies() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let nis2 = registry.get(&RegulationId::new("nis2").unwrap()).unwrap();
        let model = CostModel::for_regulation(nis2).unwrap();
        assert_eq!(
            model.estimate(EffortLevel::Low, 0, size(100)),
            CostEstimate { min: 1_500, max: 7_800 }
        );
        let gdpr = registry.get(&RegulationId::new("gdpr").unwrap()).unwrap();
        assert_eq!(*CostModel::for_regulation(gdpr).unwrap().effort_days(), DEFAULT_EFFORT_DAYS);
    }

    #[test]
    fn invalid_tables_rejected() {
        let inverted = EffortDays {
            low: DayRange::new(6.0, 3.0),
            ..DEFAULT_EFFORT_DAYS
        };
        assert!(matches!(
            CostModel::new(inverted, 0.6),
            Err(InvalidInputError::InvalidDayRange { .. })
        ));
        assert!(matches!(
            CostModel::new(DEFAULT_EFFORT_DAYS, f64::NAN),
            Err(InvalidInputError::InvalidSizeExponent(_))
        ));
    }

    #[test]
    fn scaled_days_in_tenths() {
        let model = CostModel::default();
        assert_eq!(
            model.scaled_days(EffortLevel::Medium, size(100)),
            ScaledDays { min_tenths: 50, max_tenths: 150 }
        );
    }
}
