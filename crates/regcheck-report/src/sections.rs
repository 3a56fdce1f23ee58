//! Section toggles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use regcheck_core::RecommendationId;

/// Which parts of a report are included.
///
/// A hidden recommendation is dropped from the recommendation list and
/// from the cost sum alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSections {
    pub categories: bool,
    pub recommendations: bool,
    pub costs: bool,
    pub roadmap: bool,
    pub quick_check: bool,
    pub hidden_recommendations: BTreeSet<RecommendationId>,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            categories: true,
            recommendations: true,
            costs: true,
            roadmap: true,
            quick_check: true,
            hidden_recommendations: BTreeSet::new(),
        }
    }
}

impl ReportSections {
    pub fn is_hidden(&self, id: &RecommendationId) -> bool {
        self.hidden_recommendations.contains(id)
    }

    pub fn hide(&mut self, id: RecommendationId) {
        self.hidden_recommendations.insert(id);
    }
}
