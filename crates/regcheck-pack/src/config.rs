//! # Regulation Configuration
//!
//! A [`RegulationConfig`] is the static, immutable description of one
//! regulation: its requirement categories, assessment questions,
//! remediation recommendations, the ten-question quick-check subset, an
//! optional cost-model override and its translation catalog.
//!
//! Configs are YAML documents. Structural validation runs at registration
//! time ([`RegulationConfig::validate`]) so scoring never has to guard
//! against dangling category references.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use regcheck_core::{
    CategoryId, EffortLevel, Locale, Priority, QuestionId, RecommendationId, RegistryError,
    RegulationId, Tier,
};

use crate::error::{PackError, PackResult};
use crate::i18n::Translations;

/// Number of questions every quick check must contain.
pub const QUICK_CHECK_LENGTH: usize = 10;

/// A requirement category within a regulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier, unique within the regulation.
    pub id: CategoryId,
    /// Translation key of the category name.
    pub name_key: String,
}

/// An assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier, unique within the regulation.
    pub id: QuestionId,
    /// The category this question belongs to.
    pub category_id: CategoryId,
    /// Core questions count toward the simplified assessment.
    #[serde(default)]
    pub tier: Tier,
    /// Relative weight within its category. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Translation key of the question text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_key: Option<String>,
}

impl Question {
    /// Effective weight (1 when unset).
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// A remediation recommendation attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommendation identifier, unique within the regulation.
    pub id: RecommendationId,
    /// The category this recommendation remediates.
    pub category_id: CategoryId,
    /// Coarse cost/complexity rating.
    pub effort_level: EffortLevel,
    /// Translation key of the title.
    pub title: String,
    /// Optional checklist items (translation keys or plain text).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
    /// Explicit roadmap priority. Derived from the category rating when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// A question of the quick-check subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickCheckQuestion {
    /// Quick-check question identifier.
    pub id: QuestionId,
    /// Category the question probes.
    pub category_id: CategoryId,
    /// Translation key of the question text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_key: Option<String>,
}

/// Inclusive range of person-days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRange {
    /// Lower bound in days.
    pub min: f64,
    /// Upper bound in days.
    pub max: f64,
}

impl DayRange {
    /// Create a day range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Effort level → base day range table for the reference company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortDays {
    /// Range for low-effort recommendations.
    pub low: DayRange,
    /// Range for medium-effort recommendations.
    pub medium: DayRange,
    /// Range for high-effort recommendations.
    pub high: DayRange,
}

impl EffortDays {
    /// Day range for an effort level.
    pub fn range(&self, effort: EffortLevel) -> DayRange {
        match effort {
            EffortLevel::Low => self.low,
            EffortLevel::Medium => self.medium,
            EffortLevel::High => self.high,
        }
    }
}

/// Per-regulation overrides of the cost engine defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostModelOverride {
    /// Replacement effort → days table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_days: Option<EffortDays>,
    /// Replacement company-size scaling exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_exponent: Option<f64>,
}

/// Complete static configuration of one regulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationConfig {
    /// Regulation identifier (registry key).
    pub id: RegulationId,
    /// Translation key of the regulation name.
    pub name_key: String,
    /// Pack version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Categories in display order.
    pub categories: Vec<Category>,
    /// Questions in display order.
    pub questions: Vec<Question>,
    /// Recommendations in display order.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// The quick-check subset.
    #[serde(default)]
    pub quick_check: Vec<QuickCheckQuestion>,
    /// Cost-model override (NIS2 ships one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_model: Option<CostModelOverride>,
    /// Translation catalog.
    #[serde(default)]
    pub translations: Translations,
}

impl RegulationConfig {
    /// Parse a config from a YAML document.
    ///
    /// `name` identifies the document in error messages.
    pub fn from_yaml_str(name: &str, yaml: &str) -> PackResult<Self> {
        serde_yaml::from_str(yaml).map_err(|source| PackError::YamlParseStr {
            name: name.to_string(),
            source,
        })
    }

    /// Load a config from a YAML file.
    pub fn from_yaml_file(path: &Path) -> PackResult<Self> {
        let content = read_pack(path)?;
        serde_yaml::from_str(&content).map_err(|source| PackError::YamlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> PackResult<Self> {
        let content = read_pack(path)?;
        serde_json::from_str(&content).map_err(|source| PackError::JsonParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a pack file, choosing the format by extension: `.json` is JSON,
    /// anything else YAML.
    pub fn from_file(path: &Path) -> PackResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_yaml_file(path),
        }
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Look up a recommendation by id.
    pub fn recommendation(&self, id: &RecommendationId) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| &r.id == id)
    }

    /// Look up a quick-check question by id.
    pub fn quick_check_question(&self, id: &QuestionId) -> Option<&QuickCheckQuestion> {
        self.quick_check.iter().find(|q| &q.id == id)
    }

    /// Questions of a category, optionally restricted to one tier.
    ///
    /// Exact matches only; the declared order of the config is preserved.
    pub fn questions_by_category(&self, category: &CategoryId, tier: Option<Tier>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| &q.category_id == category)
            .filter(|q| tier.map_or(true, |t| q.tier == t))
            .collect()
    }

    /// Display name in the given locale.
    pub fn name(&self, locale: Locale) -> &str {
        self.translations.label(locale, &self.name_key)
    }

    /// Structural validation, run once at registration.
    ///
    /// Checks that identifiers are unique, every question, recommendation
    /// and quick-check question references a declared category, weights
    /// are finite and positive, and the quick check has exactly
    /// [`QUICK_CHECK_LENGTH`] distinct questions.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidConfig {
            regulation: self.id.to_string(),
            reason,
        };

        if self.categories.is_empty() {
            return Err(invalid("no categories declared".into()));
        }

        let mut category_ids = BTreeSet::new();
        for c in &self.categories {
            if !category_ids.insert(&c.id) {
                return Err(invalid(format!("duplicate category {}", c.id)));
            }
        }

        let mut question_ids = BTreeSet::new();
        for q in &self.questions {
            if !question_ids.insert(&q.id) {
                return Err(invalid(format!("duplicate question {}", q.id)));
            }
            if !category_ids.contains(&q.category_id) {
                return Err(invalid(format!(
                    "question {} references unknown category {}",
                    q.id, q.category_id
                )));
            }
            if let Some(w) = q.weight {
                if !w.is_finite() || w <= 0.0 {
                    return Err(invalid(format!("question {} has invalid weight {w}", q.id)));
                }
            }
        }

        let mut recommendation_ids = BTreeSet::new();
        for r in &self.recommendations {
            if !recommendation_ids.insert(&r.id) {
                return Err(invalid(format!("duplicate recommendation {}", r.id)));
            }
            if !category_ids.contains(&r.category_id) {
                return Err(invalid(format!(
                    "recommendation {} references unknown category {}",
                    r.id, r.category_id
                )));
            }
        }

        let mut quick_ids = BTreeSet::new();
        for q in &self.quick_check {
            if !quick_ids.insert(&q.id) {
                return Err(invalid(format!("duplicate quick-check question {}", q.id)));
            }
            if !category_ids.contains(&q.category_id) {
                return Err(invalid(format!(
                    "quick-check question {} references unknown category {}",
                    q.id, q.category_id
                )));
            }
        }
        if self.quick_check.len() != QUICK_CHECK_LENGTH {
            return Err(invalid(format!(
                "quick check must have exactly {QUICK_CHECK_LENGTH} questions, found {}",
                self.quick_check.len()
            )));
        }

        if let Some(days) = self.cost_model.as_ref().and_then(|m| m.effort_days.as_ref()) {
            for effort in EffortLevel::all() {
                let range = days.range(*effort);
                if !(range.min >= 0.0 && range.min <= range.max && range.max.is_finite()) {
                    return Err(invalid(format!(
                        "cost model day range for {effort} is invalid: {}..{}",
                        range.min, range.max
                    )));
                }
            }
        }
        if let Some(exp) = self.cost_model.as_ref().and_then(|m| m.size_exponent) {
            if !exp.is_finite() || exp <= 0.0 {
                return Err(invalid(format!("cost model size exponent {exp} is invalid")));
            }
        }

        Ok(())
    }
}

fn read_pack(path: &Path) -> PackResult<String> {
    if !path.exists() {
        return Err(PackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
