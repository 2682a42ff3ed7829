//! Verify command.

use anyhow::Result;
use hacs_release_plugin::Phase;

use super::Session;

/// Runs the verify command.
pub fn run(session: &Session) -> Result<()> {
    session.run_phase(Phase::Verify, &session.context())
}
