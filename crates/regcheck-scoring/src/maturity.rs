//! # Maturity Scoring Core
//!
//! Turns an [`AnswerSet`] into per-category scores and a weighted overall
//! score for one regulation.
//!
//! ## Category score
//!
//! ```text
//! percentage = round(100 · Σ w_q · maturity(a_q) / Σ w_q · MAX_WEIGHT)
//! ```
//!
//! summed over the category's questions in scope. An unanswered question
//! contributes 0 to the numerator and its full weight to the denominator.
//! A `not_applicable` answer removes the question from both.
//!
//! ## Overall score
//!
//! Mean of the unrounded category ratios, weighted by each category's
//! applicable question count:
//!
//! ```text
//! percentage = round(100 · Σ_c n_c · earned_c / possible_c / Σ_c n_c)
//! ```
//!
//! Every percentage scales by 100 before the final division, so a half
//! that is exact in decimal (57.5) rounds up instead of drifting below. A category with no applicable questions is
//! excluded; with none at all the overall score is 0 and red.
//!
//! Scoring is a pure function of `(config, answers, scope)`: no caching,
//! no interior state, identical input gives identical output.

use serde::{Deserialize, Serialize};

use regcheck_core::{
    percentage_of, AssessmentScope, CategoryId, MaturityLevel, RegulationId, TrafficLight,
    ValidationError,
};
use regcheck_pack::RegulationConfig;

use crate::answer::AnswerSet;

/// Score of one requirement category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_id: CategoryId,
    /// Integer percentage, 0..=100.
    pub percentage: u8,
    pub traffic_light: TrafficLight,
    /// Applicable questions with an answer.
    pub answered_count: u32,
    /// Applicable questions (scope-filtered, `not_applicable` excluded).
    pub total_count: u32,
    /// Questions answered `not_applicable`.
    pub not_applicable_count: u32,
}

/// Aggregate score over all categories of one regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub percentage: u8,
    /// Share of applicable questions answered, 0..=100.
    pub completion_rate: u8,
    pub answered_questions: u32,
    pub total_questions: u32,
    pub traffic_light: TrafficLight,
}

impl OverallScore {
    /// Score with no questions: 0 %, red.
    pub fn empty() -> Self {
        Self {
            percentage: 0,
            completion_rate: 0,
            answered_questions: 0,
            total_questions: 0,
            traffic_light: TrafficLight::Red,
        }
    }
}

/// Full result of scoring one regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub regulation_id: RegulationId,
    pub scope: AssessmentScope,
    /// Scored categories in the config's declared order.
    pub categories: Vec<CategoryScore>,
    /// Categories without applicable questions in this scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_categories: Vec<CategoryId>,
    pub overall: OverallScore,
}

impl AssessmentResult {
    pub fn category(&self, id: &CategoryId) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| &c.category_id == id)
    }
}

/// Check every answer against the config.
///
/// Each answer must name a declared question, and its category must be
/// that question's category.
pub fn validate_answers(config: &RegulationConfig, answers: &AnswerSet) -> Result<(), ValidationError> {
    for answer in answers.iter() {
        let Some(question) = config.question(&answer.question_id) else {
            tracing::warn!(
                regulation = %config.id,
                question = %answer.question_id,
                "answer references unknown question"
            );
            return Err(ValidationError::UnknownQuestion {
                regulation: config.id.to_string(),
                question: answer.question_id.to_string(),
            });
        };
        if question.category_id != answer.category_id {
            tracing::warn!(
                regulation = %config.id,
                question = %answer.question_id,
                "answer category does not match question"
            );
            return Err(ValidationError::CategoryMismatch {
                question: answer.question_id.to_string(),
                expected: question.category_id.to_string(),
                actual: answer.category_id.to_string(),
            });
        }
    }
    Ok(())
}

/// Per-category tallies before rounding.
struct Tally {
    earned: f64,
    possible: f64,
    answered: u32,
    applicable: u32,
    not_applicable: u32,
}

fn tally_category(
    config: &RegulationConfig,
    category: &CategoryId,
    answers: &AnswerSet,
    scope: AssessmentScope,
) -> Tally {
    let mut tally = Tally {
        earned: 0.0,
        possible: 0.0,
        answered: 0,
        applicable: 0,
        not_applicable: 0,
    };
    for question in config
        .questions_by_category(category, None)
        .into_iter()
        .filter(|q| scope.includes(q.tier))
    {
        let weight = question.effective_weight();
        let value = answers.get(&question.id).map(|a| a.value);
        match value.map(MaturityLevel::weight) {
            Some(None) => tally.not_applicable += 1,
            Some(Some(maturity)) => {
                tally.answered += 1;
                tally.applicable += 1;
                tally.earned += weight * maturity;
                tally.possible += weight * MaturityLevel::MAX_WEIGHT;
            }
            None => {
                tally.applicable += 1;
                tally.possible += weight * MaturityLevel::MAX_WEIGHT;
            }
        }
    }
    tally
}

fn completion_rate(answered: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    percentage_of(f64::from(answered), f64::from(total))
}

/// Score one regulation.
///
/// # Errors
///
/// Fails with a [`ValidationError`] if any answer references an unknown
/// question or the wrong category. Answers to questions outside `scope`
/// are valid but ignored.
pub fn score_assessment(
    config: &RegulationConfig,
    answers: &AnswerSet,
    scope: AssessmentScope,
) -> Result<AssessmentResult, ValidationError> {
    validate_answers(config, answers)?;

    let mut categories = Vec::with_capacity(config.categories.len());
    let mut excluded_categories = Vec::new();
    let mut weighted_earned = 0.0;
    let mut answered_questions = 0u32;
    let mut total_questions = 0u32;

    for category in &config.categories {
        let tally = tally_category(config, &category.id, answers, scope);
        if tally.applicable == 0 || tally.possible <= 0.0 {
            excluded_categories.push(category.id.clone());
            continue;
        }
        let percentage = percentage_of(tally.earned, tally.possible);

        weighted_earned += tally.earned * f64::from(tally.applicable) / tally.possible;
        answered_questions += tally.answered;
        total_questions += tally.applicable;

        categories.push(CategoryScore {
            category_id: category.id.clone(),
            percentage,
            traffic_light: TrafficLight::from_percentage(percentage),
            answered_count: tally.answered,
            total_count: tally.applicable,
            not_applicable_count: tally.not_applicable,
        });
    }

    let overall = if total_questions == 0 {
        OverallScore::empty()
    } else {
        let percentage = percentage_of(weighted_earned, f64::from(total_questions));
        OverallScore {
            percentage,
            completion_rate: completion_rate(answered_questions, total_questions),
            answered_questions,
            total_questions,
            traffic_light: TrafficLight::from_percentage(percentage),
        }
    };

    tracing::debug!(
        regulation = %config.id,
        scope = %scope,
        percentage = overall.percentage,
        completion = overall.completion_rate,
        excluded = excluded_categories.len(),
        "scored assessment"
    );

    Ok(AssessmentResult {
        regulation_id: config.id.clone(),
        scope,
        categories,
        excluded_categories,
        overall,
    })
}
