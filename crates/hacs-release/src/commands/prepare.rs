//! Prepare command.

use anyhow::Result;
use clap::Args;
use hacs_release_plugin::Phase;
use semver::Version;

use super::Session;

/// Arguments for the prepare command.
#[derive(Debug, Args)]
pub struct PrepareArgs {
    /// Version to write into manifest.json
    #[arg(short, long, value_name = "SEMVER")]
    pub next_version: Version,

    /// Show the change without writing it
    #[arg(short, long)]
    pub dry_run: bool,
}

/// Runs the prepare command.
pub fn run(session: &Session, args: &PrepareArgs) -> Result<()> {
    let ctx = session
        .context()
        .with_next_version(args.next_version.clone())
        .dry_run(args.dry_run);

    session.run_phase(Phase::Prepare, &ctx)
}
