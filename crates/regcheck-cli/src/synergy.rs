//! # Synergy Subcommand
//!
//! Cross-regulation view over every regulation with stored answers, or the
//! regulations named with `--regulation`: per-regulation scores, pairwise
//! topic overlap and the consolidated three-phase roadmap.

use std::fmt::{self, Write as _};

use anyhow::Result;
use clap::Args;

use regcheck_core::AssessmentScope;
use regcheck_pack::RegulationConfig;
use regcheck_report::MultiRegulationReport;
use regcheck_scoring::AssessmentResult;
use regcheck_synergy::RoadmapPhase;

use crate::session::Session;

/// Arguments for the synergy subcommand.
#[derive(Args, Debug)]
pub struct SynergyArgs {
    /// Regulations to combine; defaults to every started regulation.
    #[arg(long = "regulation", value_name = "ID")]
    pub regulations: Vec<String>,

    /// Put recommendations of green categories on the roadmap too.
    #[arg(long)]
    pub include_green: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn selected<'s>(session: &'s Session, ids: &[String]) -> Result<Vec<&'s RegulationConfig>> {
    if ids.is_empty() {
        return session.started_regulations();
    }
    ids.iter().map(|id| session.config(id)).collect()
}

fn render(report: &MultiRegulationReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Regulations")?;
    for entry in &report.entries {
        writeln!(
            out,
            "  {:>4}%  {:<7} {:>3} topics  {}",
            entry.overall.percentage,
            entry.overall.traffic_light.as_str(),
            entry.topic_count,
            entry.name
        )?;
    }

    if !report.synergies.is_empty() {
        writeln!(out, "\nSynergies")?;
        for row in &report.synergies {
            writeln!(
                out,
                "  {:>3}%  {} / {}: {}",
                row.pair.overlap_percent,
                row.first_name,
                row.second_name,
                row.topic_names.join(", ")
            )?;
        }
    }

    for phase in RoadmapPhase::all() {
        let rows: Vec<_> = report.roadmap.iter().filter(|r| r.item.phase == *phase).collect();
        if rows.is_empty() {
            continue;
        }
        writeln!(out, "\n{phase}")?;
        for row in rows {
            let also = if row.item.also_covers.is_empty() {
                String::new()
            } else {
                let ids: Vec<&str> = row.item.also_covers.iter().map(|id| id.as_str()).collect();
                format!(" (also {})", ids.join(", "))
            };
            writeln!(
                out,
                "  [{}] {:<6} {}{}",
                row.item.regulation_id,
                row.item.priority,
                row.title_label,
                also
            )?;
        }
    }
    Ok(out)
}

/// Execute the synergy subcommand.
pub fn run_synergy(args: &SynergyArgs, session: &Session) -> Result<u8> {
    let configs = selected(session, &args.regulations)?;
    if configs.is_empty() {
        println!("No started regulations. Record answers with `regcheck answer` first.");
        return Ok(0);
    }

    let results = configs
        .iter()
        .map(|config| session.assess(config, AssessmentScope::Full))
        .collect::<Result<Vec<AssessmentResult>>>()?;
    let report = MultiRegulationReport::build(
        &session.registry,
        &session.crosswalk,
        &results,
        session.settings.locale,
        args.include_green,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report)?);
    }
    Ok(0)
}
