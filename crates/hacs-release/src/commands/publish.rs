//! Publish command.

use anyhow::Result;
use clap::Args;
use hacs_release_plugin::Phase;

use super::Session;

/// Arguments for the publish command.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Check hacs.json without creating the archive
    #[arg(short, long)]
    pub dry_run: bool,
}

/// Runs the publish command.
pub fn run(session: &Session, args: &PublishArgs) -> Result<()> {
    let ctx = session.context().dry_run(args.dry_run);
    session.run_phase(Phase::Publish, &ctx)
}
