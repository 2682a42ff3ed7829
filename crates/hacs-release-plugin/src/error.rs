//! Plugin error types.

use thiserror::Error;

/// Boxed error produced by a hook implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Plugin-related errors.
///
/// Each phase failure keeps the hook's own error as its source, so callers
/// can downcast to the concrete type the hook produced.
#[derive(Debug, Error)]
pub enum PluginError {
    /// `verify_conditions` rejected the run.
    #[error("verify conditions failed: {0}")]
    VerifyFailed(#[source] BoxError),

    /// `prepare` failed.
    #[error("prepare failed: {0}")]
    PrepareFailed(#[source] BoxError),

    /// `publish` failed.
    #[error("publish failed: {0}")]
    PublishFailed(#[source] BoxError),
}

impl PluginError {
    /// Returns the hook error behind the phase failure.
    #[must_use]
    pub fn hook_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            Self::VerifyFailed(e) | Self::PrepareFailed(e) | Self::PublishFailed(e) => e.as_ref(),
        }
    }
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
