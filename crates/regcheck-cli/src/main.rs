//! # regcheck CLI entry point
//!
//! Parses command-line arguments, loads settings and packs, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regcheck_cli::answer::{run_answer, AnswerArgs};
use regcheck_cli::cost::{run_cost, CostArgs};
use regcheck_cli::list::{run_list, ListArgs};
use regcheck_cli::quick_check::{run_quick_check, QuickCheckArgs};
use regcheck_cli::report::{run_report, ReportArgs};
use regcheck_cli::reset::{run_reset, ResetArgs};
use regcheck_cli::score::{run_score, ScoreArgs};
use regcheck_cli::session::Session;
use regcheck_cli::settings::{Overrides, Settings};
use regcheck_cli::synergy::{run_synergy, SynergyArgs};
use regcheck_core::Locale;

/// Compliance self-assessment for NIS2, DORA, GDPR and related regulations.
///
/// Records maturity answers per regulation, scores them into traffic-light
/// ratings, estimates remediation cost and finds overlap between
/// regulations.
#[derive(Parser, Debug)]
#[command(name = "regcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to the settings file (default: ./regcheck.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding persisted answers.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Output language: de or en.
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Employees of the assessed company, for cost estimates.
    #[arg(long, global = true, allow_negative_numbers = true)]
    company_size: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered regulations.
    List(ListArgs),

    /// Record or clear one maturity answer.
    Answer(AnswerArgs),

    /// Answer or show the ten-question quick check.
    QuickCheck(QuickCheckArgs),

    /// Score the stored answers of a regulation.
    Score(ScoreArgs),

    /// Estimate remediation effort and cost.
    Cost(CostArgs),

    /// Compare regulations and build the consolidated roadmap.
    Synergy(SynergyArgs),

    /// Write report data for a regulation.
    Report(ReportArgs),

    /// Delete the stored answers of a regulation.
    Reset(ResetArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_session(cli: &Cli) -> anyhow::Result<Session> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let overrides = Overrides {
        locale: cli.locale,
        company_size: cli.company_size,
        state_dir: cli.state_dir.clone(),
    };
    let settings = Settings::load(cli.config.as_deref(), &cwd, &overrides)?;
    tracing::debug!(
        locale = %settings.locale,
        company_size = settings.company_size,
        state_dir = %settings.state_dir.display(),
        "resolved settings"
    );
    Session::open(settings)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "regcheck starting");

    let result = open_session(&cli).and_then(|session| match &cli.command {
        Commands::List(args) => run_list(args, &session),
        Commands::Answer(args) => run_answer(args, &session),
        Commands::QuickCheck(args) => run_quick_check(args, &session),
        Commands::Score(args) => run_score(args, &session),
        Commands::Cost(args) => run_cost(args, &session),
        Commands::Synergy(args) => run_synergy(args, &session),
        Commands::Report(args) => run_report(args, &session),
        Commands::Reset(args) => run_reset(args, &session),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
