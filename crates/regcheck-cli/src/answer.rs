//! # Answer Subcommand
//!
//! Records or clears one maturity answer. The category is taken from the
//! question's declaration, so callers only name the question.

use anyhow::{Context, Result};
use clap::Args;

use regcheck_core::{MaturityLevel, QuestionId};
use regcheck_scoring::Answer;

use crate::session::Session;

/// Arguments for the answer subcommand.
#[derive(Args, Debug)]
pub struct AnswerArgs {
    /// Regulation identifier, e.g. `nis2`.
    pub regulation: String,

    /// Question identifier, e.g. `nis2-gov-1`.
    pub question: String,

    /// implemented | partial | not_implemented | not_applicable
    /// (also: yes, no, n/a).
    #[arg(required_unless_present = "clear")]
    pub level: Option<MaturityLevel>,

    /// Remove the stored answer instead of setting one.
    #[arg(long, conflicts_with = "level")]
    pub clear: bool,
}

/// Execute the answer subcommand.
pub fn run_answer(args: &AnswerArgs, session: &Session) -> Result<u8> {
    let config = session.config(&args.regulation)?;
    let question_id = QuestionId::new(args.question.as_str())?;
    let store = session.pool.assessment(&config.id)?;

    if args.clear {
        let state = store.remove(&question_id)?;
        tracing::info!(regulation = %config.id, question = %question_id, "cleared answer");
        println!("Cleared {question_id} ({} answers stored)", state.answers.len());
        return Ok(0);
    }

    let question = config.question(&question_id).with_context(|| {
        format!("regulation '{}' has no question '{question_id}'", config.id)
    })?;
    let Some(level) = args.level else {
        anyhow::bail!("a maturity level is required unless --clear is given");
    };

    let answer = Answer::new(question_id.clone(), question.category_id.clone(), level);
    let state = store.set_checked(config, answer)?;
    tracing::info!(
        regulation = %config.id,
        question = %question_id,
        level = level.as_str(),
        revision = state.revision,
        "recorded answer"
    );
    println!(
        "{question_id} = {} ({} answers stored)",
        level.as_str(),
        state.answers.len()
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::temp_session;
    use regcheck_core::AssessmentScope;

    fn args(question: &str, level: Option<MaturityLevel>, clear: bool) -> AnswerArgs {
        AnswerArgs {
            regulation: "nis2".into(),
            question: question.into(),
            level,
            clear,
        }
    }

    #[test]
    fn records_and_clears() {
        let (_dir, session) = temp_session();
        let set = args("nis2-gov-1", Some(MaturityLevel::Implemented), false);
        assert_eq!(run_answer(&set, &session).unwrap(), 0);

        let nis2 = session.config("nis2").unwrap();
        let result = session.assess(nis2, AssessmentScope::Full).unwrap();
        assert_eq!(result.overall.answered_questions, 1);
        assert_eq!(session.started_regulations().unwrap().len(), 1);

        run_answer(&args("nis2-gov-1", None, true), &session).unwrap();
        let result = session.assess(nis2, AssessmentScope::Full).unwrap();
        assert_eq!(result.overall.answered_questions, 0);
    }

    #[test]
    fn unknown_question_rejected() {
        let (_dir, session) = temp_session();
        let err = run_answer(&args("nis2-nope", Some(MaturityLevel::Partial), false), &session)
            .unwrap_err();
        assert!(err.to_string().contains("nis2-nope"));
        let nis2 = session.config("nis2").unwrap();
        assert!(session.pool.assessment(&nis2.id).unwrap().snapshot().answers.is_empty());
    }
}
