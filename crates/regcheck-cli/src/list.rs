//! # List Subcommand
//!
//! Registered regulations with their category, question and recommendation
//! counts.

use std::fmt::{self, Write as _};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use regcheck_core::{Locale, Tier};
use regcheck_pack::RegulationRegistry;

use crate::session::Session;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListRow<'a> {
    id: &'a str,
    name: &'a str,
    categories: usize,
    core_questions: usize,
    questions: usize,
    recommendations: usize,
}

fn rows(registry: &RegulationRegistry, locale: Locale) -> Vec<ListRow<'_>> {
    registry
        .iter()
        .map(|config| ListRow {
            id: config.id.as_str(),
            name: config.name(locale),
            categories: config.categories.len(),
            core_questions: config.questions.iter().filter(|q| q.tier == Tier::Core).count(),
            questions: config.questions.len(),
            recommendations: config.recommendations.len(),
        })
        .collect()
}

fn render_table(rows: &[ListRow<'_>]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<18} {:>10} {:>14} {:>15}  NAME",
        "ID", "CATEGORIES", "QUESTIONS", "RECOMMENDATIONS"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<18} {:>10} {:>14} {:>15}  {}",
            row.id,
            row.categories,
            format!("{}/{}", row.core_questions, row.questions),
            row.recommendations,
            row.name
        )?;
    }
    writeln!(out, "\nTotal: {} regulations", rows.len())?;
    Ok(out)
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, session: &Session) -> Result<u8> {
    let rows = rows(&session.registry, session.settings.locale);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows)?);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_builtin() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let rows = rows(&registry, Locale::En);
        assert_eq!(rows.len(), registry.len());
        let nis2 = rows.iter().find(|r| r.id == "nis2").unwrap();
        assert_eq!(nis2.name, "NIS2 Directive");
        assert!(nis2.core_questions < nis2.questions);
    }

    #[test]
    fn table_has_header_and_total() {
        let registry = RegulationRegistry::with_builtins().unwrap();
        let table = render_table(&rows(&registry, Locale::De)).unwrap();
        assert!(table.starts_with("ID"));
        assert!(table.contains("NIS2-Richtlinie"));
        assert!(table.contains(&format!("Total: {} regulations", registry.len())));
    }
}
