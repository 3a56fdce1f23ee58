//! # Quick-Check Subcommand
//!
//! Records one yes/partial/no answer of the ten-question quick check, or
//! prints the quick-check questions and the current score.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::Args;

use regcheck_core::{Locale, QuestionId, QuickCheckValue};
use regcheck_pack::RegulationConfig;
use regcheck_scoring::{QuickCheckAnswer, QuickCheckScore, QuickCheckSet};

use crate::session::Session;

/// Arguments for the quick-check subcommand.
#[derive(Args, Debug)]
pub struct QuickCheckArgs {
    /// Regulation identifier.
    pub regulation: String,

    /// Quick-check question; omit to list the questions.
    #[arg(requires = "value")]
    pub question: Option<String>,

    /// yes | partial | no
    pub value: Option<QuickCheckValue>,
}

fn render_status(
    config: &RegulationConfig,
    answers: &QuickCheckSet,
    score: Option<&QuickCheckScore>,
    locale: Locale,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for question in &config.quick_check {
        let value = answers
            .get(&question.id)
            .map_or("-", |answer| answer.value.as_str());
        let text = question
            .text_key
            .as_deref()
            .map_or(question.id.as_str(), |key| config.translations.label(locale, key));
        writeln!(out, "{:<12} {:<8} {}", question.id.as_str(), value, text)?;
    }
    match score {
        Some(score) => {
            writeln!(
                out,
                "\nScore: {}% ({}), {}/{} answered{}",
                score.overall.percentage,
                score.overall.traffic_light,
                score.overall.answered_questions,
                score.overall.total_questions,
                if score.completed { "" } else { ", incomplete" }
            )?;
        }
        None => {
            writeln!(out, "\nNo quick-check answers yet.")?;
        }
    }
    Ok(out)
}

/// Execute the quick-check subcommand.
pub fn run_quick_check(args: &QuickCheckArgs, session: &Session) -> Result<u8> {
    let config = session.config(&args.regulation)?;
    let store = session.pool.quick_check(&config.id)?;

    if let (Some(question), Some(value)) = (&args.question, args.value) {
        let question_id = QuestionId::new(question.as_str())?;
        let declared = config.quick_check_question(&question_id).with_context(|| {
            format!("regulation '{}' has no quick-check question '{question_id}'", config.id)
        })?;
        let answer = QuickCheckAnswer::new(question_id.clone(), declared.category_id.clone(), value);
        let state = store.set_checked(config, answer)?;
        tracing::info!(
            regulation = %config.id,
            question = %question_id,
            value = value.as_str(),
            revision = state.revision,
            "recorded quick-check answer"
        );
    }

    let score = session.quick_check(config)?;
    let snapshot = store.snapshot();
    print!(
        "{}",
        render_status(config, &snapshot.answers, score.as_ref(), session.settings.locale)?
    );
    Ok(0)
}
