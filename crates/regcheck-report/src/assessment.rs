//! # Assessment Report
//!
//! The plain data a PDF renderer needs for one regulation: localized names,
//! category breakdown, prioritised recommendations with costs, the cost
//! summary and a single-regulation roadmap. Sections switched off in
//! [`ReportSections`] are omitted from the output entirely.

use serde::{Deserialize, Serialize};

use regcheck_core::{
    AssessmentScope, CategoryId, CompanySize, ContentDigest, EffortLevel, Locale, Priority,
    RecommendationId, RegulationId, Timestamp, TrafficLight,
};
use regcheck_cost::{CostEstimate, CostModel, CostSummary};
use regcheck_pack::{Crosswalk, RegulationConfig};
use regcheck_scoring::{prioritize, AssessmentResult, CategoryScore, OverallScore, QuickCheckScore};
use regcheck_synergy::{build_roadmap, ConsolidatedRoadmapItem};

use crate::digest::body_digest;
use crate::error::ReportError;
use crate::sections::ReportSections;

/// One category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub name: String,
    #[serde(flatten)]
    pub score: CategoryScore,
}

/// One recommendation as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecommendation {
    pub id: RecommendationId,
    pub category_id: CategoryId,
    pub title: String,
    pub effort_level: EffortLevel,
    pub priority: Priority,
    pub category_light: TrafficLight,
    pub checklist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostEstimate>,
    /// `cost` formatted for the report locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_label: Option<String>,
}

/// Report of one regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub regulation_id: RegulationId,
    pub name: String,
    pub locale: Locale,
    pub generated_at: Timestamp,
    pub scope: AssessmentScope,
    pub overall: OverallScore,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<ReportRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_summary: Option<CostSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<ConsolidatedRoadmapItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_check: Option<QuickCheckScore>,
    pub digest: ContentDigest,
}

impl AssessmentReport {
    /// Recompute the digest and compare it to the stored one.
    pub fn verify_digest(&self) -> Result<bool, ReportError> {
        Ok(body_digest(self)? == self.digest)
    }
}

/// Format a cost range for `locale`, e.g. `1.000 € – 6.500 €`.
pub fn format_range(locale: Locale, cost: CostEstimate) -> String {
    format!("{} – {}", locale.format_eur(cost.min), locale.format_eur(cost.max))
}

/// Assembles [`AssessmentReport`]s for one regulation.
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    config: &'a RegulationConfig,
    crosswalk: &'a Crosswalk,
    locale: Locale,
    company_size: CompanySize,
    sections: ReportSections,
    include_green: bool,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a RegulationConfig, crosswalk: &'a Crosswalk) -> Self {
        Self {
            config,
            crosswalk,
            locale: Locale::default(),
            company_size: CompanySize::default(),
            sections: ReportSections::default(),
            include_green: false,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn company_size(mut self, size: CompanySize) -> Self {
        self.company_size = size;
        self
    }

    pub fn sections(mut self, sections: ReportSections) -> Self {
        self.sections = sections;
        self
    }

    /// Also list recommendations of green categories.
    pub fn include_green(mut self, include: bool) -> Self {
        self.include_green = include;
        self
    }

    /// Build the report for `result`, stamped with the current time.
    pub fn build(
        &self,
        result: &AssessmentResult,
        quick_check: Option<QuickCheckScore>,
    ) -> Result<AssessmentReport, ReportError> {
        self.build_at(result, quick_check, Timestamp::now())
    }

    /// Build the report for `result` with an explicit timestamp.
    pub fn build_at(
        &self,
        result: &AssessmentResult,
        quick_check: Option<QuickCheckScore>,
        generated_at: Timestamp,
    ) -> Result<AssessmentReport, ReportError> {
        let config = self.config;
        if result.regulation_id != config.id {
            return Err(ReportError::RegulationMismatch {
                result: result.regulation_id.to_string(),
                config: config.id.to_string(),
            });
        }
        let locale = self.locale;
        let label = |key: &str| config.translations.label(locale, key).to_string();

        let categories = if self.sections.categories {
            result
                .categories
                .iter()
                .map(|score| CategoryRow {
                    name: config
                        .category(&score.category_id)
                        .map(|c| label(&c.name_key))
                        .unwrap_or_else(|| score.category_id.to_string()),
                    score: score.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let candidates = prioritize(config, result, self.include_green);
        let model = CostModel::for_regulation(config)?;
        let cost_summary = model.summarize(
            candidates.iter().map(|p| &p.recommendation),
            self.company_size,
            |rec| !self.sections.is_hidden(&rec.id),
        );
        let prioritized: Vec<_> = candidates
            .into_iter()
            .filter(|p| !self.sections.is_hidden(&p.recommendation.id))
            .collect();

        let recommendations = if self.sections.recommendations {
            prioritized
                .iter()
                .map(|p| {
                    let rec = &p.recommendation;
                    let cost = self
                        .sections
                        .costs
                        .then(|| cost_summary.item(&rec.id).map(|item| item.cost))
                        .flatten();
                    ReportRecommendation {
                        id: rec.id.clone(),
                        category_id: rec.category_id.clone(),
                        title: label(&rec.title),
                        effort_level: rec.effort_level,
                        priority: p.priority,
                        category_light: p.category_light,
                        checklist: rec.checklist.iter().map(|k| label(k)).collect(),
                        cost,
                        cost_label: cost.map(|c| format_range(locale, c)),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let roadmap = self
            .sections
            .roadmap
            .then(|| build_roadmap(self.crosswalk, &prioritized, std::slice::from_ref(&config.id)));

        let mut report = AssessmentReport {
            regulation_id: config.id.clone(),
            name: config.name(locale).to_string(),
            locale,
            generated_at,
            scope: result.scope,
            overall: result.overall,
            categories,
            recommendations,
            cost_summary: self.sections.costs.then_some(cost_summary),
            roadmap,
            quick_check: quick_check.filter(|_| self.sections.quick_check),
            digest: ContentDigest { bytes: [0; 32] },
        };
        report.digest = body_digest(&report)?;
        tracing::debug!(
            regulation = %report.regulation_id,
            recommendations = report.recommendations.len(),
            digest = %report.digest,
            "assembled assessment report"
        );
        Ok(report)
    }
}
