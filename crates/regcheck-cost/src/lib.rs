//! # regcheck-cost — Cost Estimation Engine
//!
//! Derives EUR ranges for remediation work from a recommendation's effort
//! level, its checklist and the size of the assessed company.
//!
//! - [`CostModel`]: validated day table, size exponent and day rates of one
//!   regulation. [`CostModel::for_regulation`] applies a pack's override.
//! - [`CostModel::estimate`]: one `{min, max}` range.
//! - [`CostModel::summarize`]: per-recommendation [`CostItem`]s and their
//!   total, restricted by a caller-supplied filter predicate.
//!
//! All amounts are whole euros, so results serialize without floats.

pub mod model;
pub mod summary;

pub use model::{
    CostEstimate, CostModel, ScaledDays, CHECKLIST_ITEM_EUR, DEFAULT_EFFORT_DAYS,
    DEFAULT_SIZE_EXPONENT, EXTERNAL_DAY_RATE_EUR, INTERNAL_DAY_RATE_EUR, MIN_SIZE_FACTOR,
    REFERENCE_EMPLOYEES,
};
pub use summary::{summarize_regulation, CostItem, CostSummary};
