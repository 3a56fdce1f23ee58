//! # Reset Subcommand
//!
//! Deletes the stored assessment and quick-check answers of a regulation.

use anyhow::Result;
use clap::Args;

use crate::session::Session;

/// Arguments for the reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Regulation identifier.
    pub regulation: String,
}

/// Execute the reset subcommand.
pub fn run_reset(args: &ResetArgs, session: &Session) -> Result<u8> {
    let config = session.config(&args.regulation)?;
    session.pool.reset(&config.id)?;
    tracing::info!(regulation = %config.id, "reset answers");
    println!("Reset all answers for {}", config.id);
    Ok(0)
}
