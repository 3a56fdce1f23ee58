//! # Score Subcommand
//!
//! Scores the stored answers of one regulation and prints the category
//! breakdown, or the quick-check score with `--quick`.

use std::fmt::{self, Write as _};

use anyhow::Result;
use clap::Args;

use regcheck_core::{AssessmentScope, Locale};
use regcheck_pack::RegulationConfig;
use regcheck_scoring::AssessmentResult;

use crate::session::Session;

/// Arguments for the score subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Regulation identifier.
    pub regulation: String,

    /// Question set to score: core or full.
    #[arg(long, default_value = "full")]
    pub scope: AssessmentScope,

    /// Score the quick check instead of the full assessment.
    #[arg(long, conflicts_with = "scope")]
    pub quick: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn render_result(
    config: &RegulationConfig,
    result: &AssessmentResult,
    locale: Locale,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} ({} scope)\n", config.name(locale), result.scope)?;
    for score in &result.categories {
        let name = config
            .category(&score.category_id)
            .map_or(score.category_id.as_str(), |c| {
                config.translations.label(locale, &c.name_key)
            });
        writeln!(
            out,
            "{:>4}%  {:<7} {:>3}/{:<3} {}",
            score.percentage,
            score.traffic_light.as_str(),
            score.answered_count,
            score.total_count,
            name
        )?;
    }
    for excluded in &result.excluded_categories {
        writeln!(out, "   -   n/a             {excluded}")?;
    }
    let overall = &result.overall;
    writeln!(
        out,
        "\nOverall: {}% ({}), {}% complete ({}/{} questions)",
        overall.percentage,
        overall.traffic_light,
        overall.completion_rate,
        overall.answered_questions,
        overall.total_questions
    )?;
    Ok(out)
}

/// Execute the score subcommand.
pub fn run_score(args: &ScoreArgs, session: &Session) -> Result<u8> {
    let config = session.config(&args.regulation)?;

    if args.quick {
        let Some(score) = session.quick_check(config)? else {
            if args.json {
                println!("null");
            } else {
                println!("No quick-check answers for {}.", config.id);
            }
            return Ok(0);
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&score)?);
        } else {
            println!(
                "Quick check {}: {}% ({}), {}/{} answered{}",
                config.id,
                score.overall.percentage,
                score.overall.traffic_light,
                score.overall.answered_questions,
                score.overall.total_questions,
                if score.completed { "" } else { ", incomplete" }
            );
        }
        return Ok(0);
    }

    let result = session.assess(config, args.scope)?;
    tracing::debug!(
        regulation = %config.id,
        scope = %args.scope,
        percentage = result.overall.percentage,
        "scored assessment"
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(config, &result, session.settings.locale)?);
    }
    Ok(0)
}
