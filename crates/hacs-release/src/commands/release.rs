//! Release command.

use anyhow::Result;
use clap::Args;
use hacs_release_plugin::Phase;
use semver::Version;
use tracing::info;

use super::Session;

/// Arguments for the release command.
#[derive(Debug, Args)]
pub struct ReleaseArgs {
    /// Version being released
    #[arg(short, long, value_name = "SEMVER")]
    pub next_version: Version,

    /// Perform a dry run without making changes
    #[arg(short, long)]
    pub dry_run: bool,
}

/// Runs verify, prepare and publish, stopping at the first failure.
pub fn run(session: &Session, args: &ReleaseArgs) -> Result<()> {
    let ctx = session
        .context()
        .with_next_version(args.next_version.clone())
        .dry_run(args.dry_run);

    for phase in Phase::ALL {
        session.run_phase(phase, &ctx)?;
    }

    if args.dry_run {
        info!(version = %args.next_version, "dry run completed, no changes were made");
    } else {
        info!(version = %args.next_version, "release completed");
    }

    Ok(())
}
