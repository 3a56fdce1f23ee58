//! # Multi-Regulation Report
//!
//! Localized rendering data for the cross-regulation overview.

use serde::{Deserialize, Serialize};

use regcheck_core::{ContentDigest, Locale, RegulationId, Timestamp};
use regcheck_pack::{Crosswalk, RegulationRegistry};
use regcheck_scoring::{AssessmentResult, OverallScore};
use regcheck_synergy::{Aggregator, ConsolidatedRoadmapItem, MultiRegulationOverview, SynergyPair};

use crate::digest::body_digest;
use crate::error::ReportError;

/// One regulation in the overview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationRow {
    pub regulation_id: RegulationId,
    pub name: String,
    pub overall: OverallScore,
    pub topic_count: u32,
}

/// One regulation pair with display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyRow {
    #[serde(flatten)]
    pub pair: SynergyPair,
    pub first_name: String,
    pub second_name: String,
    /// Names of `shared_topics`, same order.
    pub topic_names: Vec<String>,
}

/// One roadmap line with display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRow {
    #[serde(flatten)]
    pub item: ConsolidatedRoadmapItem,
    pub regulation_name: String,
    pub title_label: String,
}

/// Report over every started regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRegulationReport {
    pub locale: Locale,
    pub generated_at: Timestamp,
    pub entries: Vec<RegulationRow>,
    pub synergies: Vec<SynergyRow>,
    pub roadmap: Vec<RoadmapRow>,
    pub digest: ContentDigest,
}

impl MultiRegulationReport {
    /// Localize an aggregated overview.
    pub fn from_overview(
        registry: &RegulationRegistry,
        crosswalk: &Crosswalk,
        overview: &MultiRegulationOverview,
        locale: Locale,
        generated_at: Timestamp,
    ) -> Result<Self, ReportError> {
        let name = |id: &RegulationId| {
            registry
                .get(id)
                .map(|c| c.name(locale).to_string())
                .unwrap_or_else(|| id.to_string())
        };

        let entries = overview
            .entries
            .iter()
            .map(|e| RegulationRow {
                regulation_id: e.regulation_id.clone(),
                name: name(&e.regulation_id),
                overall: e.overall,
                topic_count: e.topic_count,
            })
            .collect();

        let synergies = overview
            .synergies
            .iter()
            .map(|pair| SynergyRow {
                first_name: name(&pair.first),
                second_name: name(&pair.second),
                topic_names: pair
                    .shared_topics
                    .iter()
                    .map(|t| crosswalk.topic_name(locale, t).to_string())
                    .collect(),
                pair: pair.clone(),
            })
            .collect();

        let roadmap = overview
            .roadmap
            .iter()
            .map(|item| {
                let title_label = registry
                    .get(&item.regulation_id)
                    .map(|c| c.translations.label(locale, &item.title).to_string())
                    .unwrap_or_else(|| item.title.clone());
                RoadmapRow {
                    regulation_name: name(&item.regulation_id),
                    title_label,
                    item: item.clone(),
                }
            })
            .collect();

        let mut report = Self {
            locale,
            generated_at,
            entries,
            synergies,
            roadmap,
            digest: ContentDigest { bytes: [0; 32] },
        };
        report.digest = body_digest(&report)?;
        Ok(report)
    }

    /// Aggregate `results` and localize the overview in one step.
    pub fn build(
        registry: &RegulationRegistry,
        crosswalk: &Crosswalk,
        results: &[AssessmentResult],
        locale: Locale,
        include_green: bool,
    ) -> Result<Self, ReportError> {
        let overview = Aggregator::new(registry, crosswalk).aggregate(results, include_green)?;
        Self::from_overview(registry, crosswalk, &overview, locale, Timestamp::now())
    }

    pub fn verify_digest(&self) -> Result<bool, ReportError> {
        Ok(body_digest(self)? == self.digest)
    }
}
