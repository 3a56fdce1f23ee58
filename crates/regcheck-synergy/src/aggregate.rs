//! # Multi-Regulation Overview
//!
//! Combines the assessment results of every regulation a user has started
//! into one overview: a score entry per regulation, the synergy of every
//! pair, and the consolidated roadmap.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use regcheck_core::RegulationId;
use regcheck_pack::{Crosswalk, RegulationRegistry};
use regcheck_scoring::{prioritize, AssessmentResult, CategoryScore, OverallScore};

use crate::error::SynergyError;
use crate::pair::{all_pairs, SynergyPair};
use crate::roadmap::{build_roadmap, ConsolidatedRoadmapItem};

/// Score summary of one started regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRegEntry {
    pub regulation_id: RegulationId,
    pub name_key: String,
    pub overall: OverallScore,
    pub categories: Vec<CategoryScore>,
    /// Number of crosswalk topics the regulation touches.
    pub topic_count: u32,
}

/// Everything the multi-regulation view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRegulationOverview {
    pub entries: Vec<MultiRegEntry>,
    pub synergies: Vec<SynergyPair>,
    pub roadmap: Vec<ConsolidatedRoadmapItem>,
}

impl MultiRegulationOverview {
    pub fn entry(&self, id: &RegulationId) -> Option<&MultiRegEntry> {
        self.entries.iter().find(|e| &e.regulation_id == id)
    }

    /// The pair of `a` and `b`, in either order.
    pub fn synergy(&self, a: &RegulationId, b: &RegulationId) -> Option<&SynergyPair> {
        self.synergies.iter().find(|p| {
            (&p.first == a && &p.second == b) || (&p.first == b && &p.second == a)
        })
    }
}

/// Aggregates results against a registry and a crosswalk.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    registry: &'a RegulationRegistry,
    crosswalk: &'a Crosswalk,
}

impl<'a> Aggregator<'a> {
    pub fn new(registry: &'a RegulationRegistry, crosswalk: &'a Crosswalk) -> Self {
        Self {
            registry,
            crosswalk,
        }
    }

    /// Build the overview of `results`, kept in the given order.
    ///
    /// Recommendations of green categories enter the roadmap only with
    /// `include_green`.
    pub fn aggregate(
        &self,
        results: &[AssessmentResult],
        include_green: bool,
    ) -> Result<MultiRegulationOverview, SynergyError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(results.len());
        let mut recommendations = Vec::new();

        for result in results {
            let id = &result.regulation_id;
            if !seen.insert(id) {
                return Err(SynergyError::DuplicateRegulation(id.to_string()));
            }
            let config = self
                .registry
                .get(id)
                .ok_or_else(|| SynergyError::UnknownRegulation(id.to_string()))?;
            entries.push(MultiRegEntry {
                regulation_id: id.clone(),
                name_key: config.name_key.clone(),
                overall: result.overall,
                categories: result.categories.clone(),
                topic_count: u32::try_from(self.crosswalk.topics_for(id).len()).unwrap_or(u32::MAX),
            });
            recommendations.extend(prioritize(config, result, include_green));
        }

        let started: Vec<RegulationId> = entries.iter().map(|e| e.regulation_id.clone()).collect();
        let synergies = all_pairs(self.crosswalk, &started);
        let roadmap = build_roadmap(self.crosswalk, &recommendations, &started);
        tracing::debug!(
            regulations = entries.len(),
            pairs = synergies.len(),
            roadmap = roadmap.len(),
            "aggregated regulations"
        );
        Ok(MultiRegulationOverview {
            entries,
            synergies,
            roadmap,
        })
    }
}
