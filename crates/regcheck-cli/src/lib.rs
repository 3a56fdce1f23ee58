//! # regcheck-cli — Compliance Self-Assessment CLI
//!
//! Provides the `regcheck` command-line interface over the scoring, cost
//! and synergy crates. Answers are persisted per regulation in the state
//! directory, so an assessment can be filled in over several invocations.
//!
//! ## Subcommands
//!
//! - `regcheck list` — Registered regulations.
//! - `regcheck answer` — Record or clear a maturity answer.
//! - `regcheck quick-check` — Answer the ten-question quick check.
//! - `regcheck score` — Category breakdown and overall score.
//! - `regcheck cost` — Remediation effort and EUR range.
//! - `regcheck synergy` — Cross-regulation overlap and roadmap.
//! - `regcheck report` — Report data as JSON with a content digest.
//! - `regcheck reset` — Delete the stored answers of a regulation.
//!
//! ```bash
//! regcheck answer nis2 nis2-gov-1 implemented
//! regcheck score nis2 --scope core
//! regcheck cost nis2 --company-size 250
//! regcheck report nis2 --out nis2.json
//! ```

pub mod answer;
pub mod cost;
pub mod list;
pub mod quick_check;
pub mod report;
pub mod reset;
pub mod score;
pub mod session;
pub mod settings;
pub mod synergy;
