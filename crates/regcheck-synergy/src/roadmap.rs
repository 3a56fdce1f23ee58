//! # Consolidated Roadmap
//!
//! Buckets the prioritised recommendations of every started regulation
//! into three phases:
//!
//! | Phase | Rule |
//! |---|---|
//! | 1 | high priority and low or medium effort |
//! | 2 | remaining high priority, or medium priority |
//! | 3 | everything else |
//!
//! Within a phase, items keep their input order: regulations in the order
//! given, recommendations in each pack's declared order.

use serde::{Deserialize, Serialize};

use regcheck_core::{
    CategoryId, EffortLevel, Priority, RecommendationId, RegulationId, TopicId, TrafficLight,
};
use regcheck_pack::Crosswalk;
use regcheck_scoring::PrioritizedRecommendation;

use crate::pair::regulations_sharing;

/// Roadmap phase, earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapPhase {
    Phase1,
    Phase2,
    Phase3,
}

impl RoadmapPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phase1 => "phase1",
            Self::Phase2 => "phase2",
            Self::Phase3 => "phase3",
        }
    }

    pub fn all() -> &'static [RoadmapPhase] {
        &[Self::Phase1, Self::Phase2, Self::Phase3]
    }

    /// Phase of a recommendation with the given priority and effort.
    pub fn classify(priority: Priority, effort: EffortLevel) -> Self {
        match (priority, effort) {
            (Priority::High, EffortLevel::Low | EffortLevel::Medium) => Self::Phase1,
            (Priority::High, EffortLevel::High) | (Priority::Medium, _) => Self::Phase2,
            (Priority::Low, _) => Self::Phase3,
        }
    }
}

impl std::fmt::Display for RoadmapPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommendation placed on the consolidated roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRoadmapItem {
    pub phase: RoadmapPhase,
    pub regulation_id: RegulationId,
    pub recommendation_id: RecommendationId,
    pub category_id: CategoryId,
    pub title: String,
    pub effort_level: EffortLevel,
    pub priority: Priority,
    pub category_light: TrafficLight,
    /// Crosswalk topics of the recommendation's category, sorted.
    pub topics: Vec<TopicId>,
    /// Other started regulations sharing one of `topics`, in input order.
    pub also_covers: Vec<RegulationId>,
}

/// Place `recommendations` on the roadmap.
///
/// `started` is the full list of regulations in the overview and feeds
/// `also_covers`.
pub fn build_roadmap(
    crosswalk: &Crosswalk,
    recommendations: &[PrioritizedRecommendation],
    started: &[RegulationId],
) -> Vec<ConsolidatedRoadmapItem> {
    let mut items: Vec<ConsolidatedRoadmapItem> = recommendations
        .iter()
        .map(|p| {
            let rec = &p.recommendation;
            let topics = crosswalk.topics_for_category(&p.regulation_id, &rec.category_id);
            let also_covers = regulations_sharing(crosswalk, &topics, &p.regulation_id, started)
                .into_iter()
                .cloned()
                .collect();
            ConsolidatedRoadmapItem {
                phase: RoadmapPhase::classify(p.priority, rec.effort_level),
                regulation_id: p.regulation_id.clone(),
                recommendation_id: rec.id.clone(),
                category_id: rec.category_id.clone(),
                title: rec.title.clone(),
                effort_level: rec.effort_level,
                priority: p.priority,
                category_light: p.category_light,
                topics: topics.into_iter().cloned().collect(),
                also_covers,
            }
        })
        .collect();
    // Stable: ties keep input order.
    items.sort_by_key(|item| item.phase);
    tracing::debug!(items = items.len(), "built consolidated roadmap");
    items
}
