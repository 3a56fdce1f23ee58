//! # Cost Subcommand
//!
//! Effort and EUR estimate for the recommendations of one regulation,
//! scaled to the company size (`--company-size` or the settings file).
//! Recommendations hidden in the report settings are left out of the total.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::Args;

use regcheck_core::{AssessmentScope, CompanySize, Locale};
use regcheck_cost::{summarize_regulation, CostModel, CostSummary};
use regcheck_pack::{Recommendation, RegulationConfig};
use regcheck_report::{format_range, ReportSections};
use regcheck_scoring::prioritize;

use crate::session::Session;

/// Arguments for the cost subcommand.
#[derive(Args, Debug)]
pub struct CostArgs {
    /// Regulation identifier.
    pub regulation: String,

    /// Only cost recommendations of categories that are not yet green.
    #[arg(long)]
    pub open_only: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

fn render_summary(
    config: &RegulationConfig,
    summary: &CostSummary,
    locale: Locale,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} for {}\n", config.name(locale), summary.company_size)?;
    for item in &summary.items {
        let title = config
            .recommendation(&item.recommendation_id)
            .map_or(item.recommendation_id.as_str(), |rec| {
                config.translations.label(locale, &rec.title)
            });
        writeln!(
            out,
            "{:<6} {:>5.1}-{:<5.1} days  {:>25}  {}",
            item.effort_level.as_str(),
            f64::from(item.days_min) / 10.0,
            f64::from(item.days_max) / 10.0,
            format_range(locale, item.cost),
            title
        )?;
    }
    writeln!(
        out,
        "\nTotal: {} ({:.1}-{:.1} days, {} recommendations)",
        format_range(locale, summary.total),
        f64::from(summary.total_days_min) / 10.0,
        f64::from(summary.total_days_max) / 10.0,
        summary.items.len()
    )?;
    Ok(out)
}

pub(crate) fn summary_for(
    session: &Session,
    config: &RegulationConfig,
    employees: i64,
    open_only: bool,
) -> Result<CostSummary> {
    let sections: ReportSections = session.settings.report.to_sections();
    let visible = |rec: &Recommendation| !sections.is_hidden(&rec.id);

    if open_only {
        let result = session.assess(config, AssessmentScope::Full)?;
        let open = prioritize(config, &result, false);
        let size = CompanySize::new(employees).context("invalid company size")?;
        let model = CostModel::for_regulation(config)?;
        return Ok(model.summarize(open.iter().map(|p| &p.recommendation), size, visible));
    }
    summarize_regulation(config, employees, visible)
        .with_context(|| format!("failed to estimate costs for {}", config.id))
}

/// Execute the cost subcommand.
pub fn run_cost(args: &CostArgs, session: &Session) -> Result<u8> {
    let config = session.config(&args.regulation)?;
    let summary = summary_for(session, config, session.settings.company_size, args.open_only)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(config, &summary, session.settings.locale)?);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::temp_session;
    use regcheck_core::RecommendationId;

    #[test]
    fn all_recommendations_counted() {
        let (_dir, session) = temp_session();
        let nis2 = session.config("nis2").unwrap();
        let summary = summary_for(&session, nis2, 100, false).unwrap();
        assert_eq!(summary.items.len(), nis2.recommendations.len());
        let mandate = summary
            .item(&RecommendationId::new("nis2-rec-gov-mandate").unwrap())
            .unwrap();
        assert_eq!((mandate.cost.min, mandate.cost.max), (1_800, 8_100));
    }

    #[test]
    fn hidden_recommendation_left_out() {
        let (_dir, mut session) = temp_session();
        let hidden = RecommendationId::new("nis2-rec-gov-mandate").unwrap();
        session.settings.report.hidden_recommendations.push(hidden.clone());
        let nis2 = session.config("nis2").unwrap();
        let summary = summary_for(&session, nis2, 100, false).unwrap();
        assert!(summary.item(&hidden).is_none());
        assert_eq!(summary.items.len(), nis2.recommendations.len() - 1);
    }

    #[test]
    fn non_positive_size_rejected() {
        let (_dir, session) = temp_session();
        let nis2 = session.config("nis2").unwrap();
        assert!(summary_for(&session, nis2, 0, false).is_err());
        assert!(summary_for(&session, nis2, -3, true).is_err());
    }

    #[test]
    fn table_renders_german_amounts() {
        let (_dir, session) = temp_session();
        let nis2 = session.config("nis2").unwrap();
        let summary = summary_for(&session, nis2, 100, false).unwrap();
        let text = render_summary(nis2, &summary, Locale::De).unwrap();
        assert!(text.contains("1.800 € – 8.100 €"));
        assert!(text.contains("Total:"));
    }
}
