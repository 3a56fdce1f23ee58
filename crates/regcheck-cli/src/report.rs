//! # Report Subcommand
//!
//! Writes the report data of one regulation as JSON, ready for a PDF
//! renderer, and prints its content digest. Section toggles and hidden
//! recommendations come from the `report:` settings block.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use regcheck_core::AssessmentScope;
use regcheck_report::{AssessmentReport, ReportBuilder};

use crate::session::Session;

/// Arguments for the report subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Regulation identifier.
    pub regulation: String,

    /// Output file; stdout if omitted.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Question set to score: core or full.
    #[arg(long, default_value = "full")]
    pub scope: AssessmentScope,

    /// Also list recommendations of green categories.
    #[arg(long)]
    pub include_green: bool,
}

pub(crate) fn build_report(args: &ReportArgs, session: &Session) -> Result<AssessmentReport> {
    let config = session.config(&args.regulation)?;
    let result = session.assess(config, args.scope)?;
    let quick_check = session.quick_check(config)?;
    let report = ReportBuilder::new(config, &session.crosswalk)
        .locale(session.settings.locale)
        .company_size(session.company_size()?)
        .sections(session.settings.report.to_sections())
        .include_green(args.include_green)
        .build(&result, quick_check)
        .with_context(|| format!("failed to build report for {}", config.id))?;
    Ok(report)
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs, session: &Session) -> Result<u8> {
    let report = build_report(args, session)?;
    let json = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            tracing::info!(
                regulation = %report.regulation_id,
                path = %path.display(),
                digest = %report.digest,
                "wrote report"
            );
            println!("Report written to {}", path.display());
            println!("  Digest: {}", report.digest);
        }
        None => println!("{json}"),
    }
    Ok(0)
}
