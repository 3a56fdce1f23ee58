//! Registry-backed entry point.
//!
//! [`Scorer`] borrows a [`RegulationRegistry`] and scores by regulation id,
//! turning a missing config into [`ScoringError::UnknownRegulation`]. The
//! registry itself never fails a lookup; this is where "missing" becomes an
//! error, for callers that want it to be one.

use thiserror::Error;

use regcheck_core::{AssessmentScope, RegulationId, ValidationError};
use regcheck_pack::{RegulationConfig, RegulationRegistry};

use crate::answer::{AnswerSet, QuickCheckSet};
use crate::maturity::{score_assessment, AssessmentResult};
use crate::quick::{score_quick_check, QuickCheckScore};

/// Errors from registry-backed scoring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// No config is registered under the id.
    #[error("regulation {0} is not registered")]
    UnknownRegulation(String),

    /// An answer failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Scores answer sets against a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'r> {
    registry: &'r RegulationRegistry,
}

impl<'r> Scorer<'r> {
    pub fn new(registry: &'r RegulationRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r RegulationRegistry {
        self.registry
    }

    fn config(&self, id: &RegulationId) -> Result<&'r RegulationConfig, ScoringError> {
        self.registry
            .get(id)
            .ok_or_else(|| ScoringError::UnknownRegulation(id.to_string()))
    }

    /// Score a maturity assessment.
    pub fn assess(
        &self,
        id: &RegulationId,
        answers: &AnswerSet,
        scope: AssessmentScope,
    ) -> Result<AssessmentResult, ScoringError> {
        Ok(score_assessment(self.config(id)?, answers, scope)?)
    }

    /// Score a quick check.
    pub fn quick_check(
        &self,
        id: &RegulationId,
        answers: &QuickCheckSet,
    ) -> Result<QuickCheckScore, ScoringError> {
        Ok(score_quick_check(self.config(id)?, answers)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_regulation_is_an_error_here() {
        let registry = RegulationRegistry::new();
        let scorer = Scorer::new(&registry);
        let err = scorer
            .assess(
                &RegulationId::new("missing").unwrap(),
                &AnswerSet::new(),
                AssessmentScope::Full,
            )
            .unwrap_err();
        assert_eq!(err, ScoringError::UnknownRegulation("missing".into()));
    }

    #[test]
    fn builtin_regulation_scores_empty_answers_red() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let scorer = Scorer::new(&registry);
        let nis2 = RegulationId::new("nis2").unwrap();
        let result = scorer
            .assess(&nis2, &AnswerSet::new(), AssessmentScope::Core)
            .unwrap();
        assert_eq!(result.overall.percentage, 0);
        assert!(result.overall.total_questions > 0);
        let quick = scorer.quick_check(&nis2, &QuickCheckSet::new()).unwrap();
        assert!(!quick.completed);
    }
}
