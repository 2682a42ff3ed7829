//! Release hook trait.

use std::fmt;

use super::Plugin;
use crate::{PluginResult, ReleaseContext};

/// A lifecycle phase of the release pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Read-only precondition checks.
    Verify,
    /// Mutates project files for the new version.
    Prepare,
    /// Produces release artifacts.
    Publish,
}

impl Phase {
    /// All phases, in the order the host runs them.
    pub const ALL: [Self; 3] = [Self::Verify, Self::Prepare, Self::Publish];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verify => write!(f, "verify"),
            Self::Prepare => write!(f, "prepare"),
            Self::Publish => write!(f, "publish"),
        }
    }
}

/// Lifecycle hooks during the release process.
///
/// Hooks are executed in order by the host:
/// 1. `verify_conditions` - Before anything is modified
/// 2. `prepare` - Once the next version is known
/// 3. `publish` - After the release state is final
///
/// A failing phase aborts the remainder of the pipeline.
pub trait ReleaseHook: Plugin {
    /// Plugin configuration handed to every phase.
    type Config;

    /// Called before any file is modified.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::VerifyFailed`](crate::PluginError::VerifyFailed)
    /// if a precondition does not hold.
    fn verify_conditions(&self, _config: &Self::Config, _ctx: &ReleaseContext) -> PluginResult<()> {
        Ok(())
    }

    /// Called once the next version is known.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::PrepareFailed`](crate::PluginError::PrepareFailed)
    /// if project files cannot be updated.
    fn prepare(&self, _config: &Self::Config, _ctx: &ReleaseContext) -> PluginResult<()> {
        Ok(())
    }

    /// Called to produce release artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::PublishFailed`](crate::PluginError::PublishFailed)
    /// if an artifact cannot be produced.
    fn publish(&self, _config: &Self::Config, _ctx: &ReleaseContext) -> PluginResult<()> {
        Ok(())
    }

    /// Runs a single phase.
    ///
    /// # Errors
    ///
    /// Returns the error of the dispatched phase.
    fn run_phase(
        &self,
        phase: Phase,
        config: &Self::Config,
        ctx: &ReleaseContext,
    ) -> PluginResult<()> {
        match phase {
            Phase::Verify => self.verify_conditions(config, ctx),
            Phase::Prepare => self.prepare(config, ctx),
            Phase::Publish => self.publish(config, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::PluginError;

    // A minimal hook that uses all defaults
    struct MinimalHook;

    impl Plugin for MinimalHook {
        fn name(&self) -> &'static str {
            "minimal-hook"
        }
        fn version(&self) -> &'static str {
            "1.0.0"
        }
    }

    impl ReleaseHook for MinimalHook {
        type Config = ();
    }

    #[derive(Default)]
    struct RecordingHook {
        calls: Mutex<Vec<Phase>>,
    }

    impl Plugin for RecordingHook {
        fn name(&self) -> &'static str {
            "recording"
        }
        fn version(&self) -> &'static str {
            "1.0.0"
        }
    }

    impl ReleaseHook for RecordingHook {
        type Config = ();

        fn verify_conditions(&self, _config: &(), _ctx: &ReleaseContext) -> PluginResult<()> {
            self.calls.lock().unwrap().push(Phase::Verify);
            Ok(())
        }

        fn prepare(&self, _config: &(), _ctx: &ReleaseContext) -> PluginResult<()> {
            self.calls.lock().unwrap().push(Phase::Prepare);
            Err(PluginError::PrepareFailed(Box::new(std::io::Error::other("no"))))
        }

        fn publish(&self, _config: &(), _ctx: &ReleaseContext) -> PluginResult<()> {
            self.calls.lock().unwrap().push(Phase::Publish);
            Ok(())
        }
    }

    #[test]
    fn test_default_phases_succeed() {
        let ctx = ReleaseContext::new("/tmp/test");
        for phase in Phase::ALL {
            assert!(MinimalHook.run_phase(phase, &(), &ctx).is_ok());
        }
    }

    #[test]
    fn test_run_phase_dispatches() {
        let hook = RecordingHook::default();
        let ctx = ReleaseContext::new("/tmp/test");

        assert!(hook.run_phase(Phase::Verify, &(), &ctx).is_ok());
        let err = hook.run_phase(Phase::Prepare, &(), &ctx).unwrap_err();
        assert!(matches!(err, PluginError::PrepareFailed(_)));
        assert_eq!(err.hook_error().to_string(), "no");
        assert!(hook.run_phase(Phase::Publish, &(), &ctx).is_ok());

        assert_eq!(
            *hook.calls.lock().unwrap(),
            vec![Phase::Verify, Phase::Prepare, Phase::Publish]
        );
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Verify.to_string(), "verify");
        assert_eq!(Phase::Prepare.to_string(), "prepare");
        assert_eq!(Phase::Publish.to_string(), "publish");
    }
}
