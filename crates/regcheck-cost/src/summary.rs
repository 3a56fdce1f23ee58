//! # Cost Summary
//!
//! Per-recommendation cost items and their aggregate. The caller decides
//! which recommendations count through a filter predicate; the engine
//! itself knows nothing about which report sections are shown or hidden.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use regcheck_core::{CategoryId, CompanySize, EffortLevel, InvalidInputError, RecommendationId};
use regcheck_pack::{Recommendation, RegulationConfig};

use crate::model::{CostEstimate, CostModel, ScaledDays};

/// Cost of one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub recommendation_id: RecommendationId,
    pub category_id: CategoryId,
    pub effort_level: EffortLevel,
    pub checklist_items: u32,
    /// Scaled person-days, tenths of a day.
    pub days_min: u32,
    pub days_max: u32,
    pub cost: CostEstimate,
}

/// Aggregate cost of a set of recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    pub company_size: CompanySize,
    /// Included items in input order, one per recommendation id.
    pub items: Vec<CostItem>,
    pub total: CostEstimate,
    pub total_days_min: u32,
    pub total_days_max: u32,
}

impl CostSummary {
    pub fn item(&self, id: &RecommendationId) -> Option<&CostItem> {
        self.items.iter().find(|item| &item.recommendation_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CostModel {
    /// Cost of one recommendation.
    pub fn cost_item(&self, recommendation: &Recommendation, size: CompanySize) -> CostItem {
        let ScaledDays {
            min_tenths,
            max_tenths,
        } = self.scaled_days(recommendation.effort_level, size);
        CostItem {
            recommendation_id: recommendation.id.clone(),
            category_id: recommendation.category_id.clone(),
            effort_level: recommendation.effort_level,
            checklist_items: u32::try_from(recommendation.checklist.len()).unwrap_or(u32::MAX),
            days_min: min_tenths,
            days_max: max_tenths,
            cost: self.estimate(
                recommendation.effort_level,
                recommendation.checklist.len(),
                size,
            ),
        }
    }

    /// Sum the costs of every recommendation `include` accepts.
    ///
    /// A recommendation id that occurs more than once is counted once, at
    /// its first occurrence.
    pub fn summarize<'a, I, F>(&self, recommendations: I, size: CompanySize, mut include: F) -> CostSummary
    where
        I: IntoIterator<Item = &'a Recommendation>,
        F: FnMut(&Recommendation) -> bool,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for recommendation in recommendations {
            if !include(recommendation) {
                continue;
            }
            if !seen.insert(&recommendation.id) {
                tracing::debug!(recommendation = %recommendation.id, "skipping duplicate recommendation");
                continue;
            }
            items.push(self.cost_item(recommendation, size));
        }

        let total: CostEstimate = items.iter().map(|item| item.cost).sum();
        let total_days_min = items.iter().fold(0u32, |acc, i| acc.saturating_add(i.days_min));
        let total_days_max = items.iter().fold(0u32, |acc, i| acc.saturating_add(i.days_max));
        tracing::debug!(
            items = items.len(),
            min = total.min,
            max = total.max,
            employees = size.employees(),
            "computed cost summary"
        );
        CostSummary {
            company_size: size,
            items,
            total,
            total_days_min,
            total_days_max,
        }
    }
}

/// Cost summary over all recommendations of a regulation, using the
/// regulation's own cost model.
///
/// # Errors
///
/// Fails for a non-positive headcount or an invalid cost-model override.
pub fn summarize_regulation<F>(
    config: &RegulationConfig,
    employees: i64,
    include: F,
) -> Result<CostSummary, InvalidInputError>
where
    F: FnMut(&Recommendation) -> bool,
{
    let size = CompanySize::new(employees)?;
    let model = CostModel::for_regulation(config)?;
    Ok(model.summarize(&config.recommendations, size, include))
}
