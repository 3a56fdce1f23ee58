//! # Quick-Check Scorer
//!
//! The ten-question yes/partial/no variant. The percentage is computed over
//! the configured quick-check length, not the number of answers, so an
//! incomplete quick check shows a correspondingly low score instead of
//! extrapolating from what has been answered so far.

use serde::{Deserialize, Serialize};

use regcheck_core::{percentage_of, TrafficLight, ValidationError};
use regcheck_pack::{RegulationConfig, QUICK_CHECK_LENGTH};

use crate::answer::QuickCheckSet;
use crate::maturity::OverallScore;

/// Result of a quick check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCheckScore {
    #[serde(flatten)]
    pub overall: OverallScore,
    /// At least [`QUICK_CHECK_LENGTH`] distinct questions answered.
    pub completed: bool,
}

/// Check every quick-check answer against the config's quick-check subset.
pub fn validate_quick_check(
    config: &RegulationConfig,
    answers: &QuickCheckSet,
) -> Result<(), ValidationError> {
    for answer in answers.iter() {
        let Some(question) = config.quick_check_question(&answer.question_id) else {
            return Err(ValidationError::UnknownQuickCheckQuestion {
                regulation: config.id.to_string(),
                question: answer.question_id.to_string(),
            });
        };
        if question.category_id != answer.category_id {
            return Err(ValidationError::CategoryMismatch {
                question: answer.question_id.to_string(),
                expected: question.category_id.to_string(),
                actual: answer.category_id.to_string(),
            });
        }
    }
    Ok(())
}

/// Score a quick check. A pure read: `answers` is not modified.
///
/// # Errors
///
/// Fails with a [`ValidationError`] if an answer names a question outside
/// the quick-check subset or the wrong category.
pub fn score_quick_check(
    config: &RegulationConfig,
    answers: &QuickCheckSet,
) -> Result<QuickCheckScore, ValidationError> {
    validate_quick_check(config, answers)?;

    let total = u32::try_from(config.quick_check.len()).unwrap_or(u32::MAX);
    let answered = u32::try_from(answers.len()).unwrap_or(u32::MAX);
    let completed = answers.len() >= QUICK_CHECK_LENGTH;

    if total == 0 {
        return Ok(QuickCheckScore {
            overall: OverallScore::empty(),
            completed,
        });
    }

    let earned: f64 = answers.iter().map(|a| a.value.weight()).sum();
    let percentage = percentage_of(earned, f64::from(total));
    let completion_rate = percentage_of(f64::from(answered), f64::from(total));

    tracing::debug!(
        regulation = %config.id,
        percentage,
        answered,
        completed,
        "scored quick check"
    );

    Ok(QuickCheckScore {
        overall: OverallScore {
            percentage,
            completion_rate,
            answered_questions: answered,
            total_questions: total,
            traffic_light: TrafficLight::from_percentage(percentage),
        },
        completed,
    })
}
