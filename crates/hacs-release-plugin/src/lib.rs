//! Plugin contract for the HACS release runner.
//!
//! This crate provides the traits and shared types a release hook is driven
//! through:
//! - [`Plugin`]: Base trait for all plugins
//! - [`ReleaseHook`]: The verify / prepare / publish lifecycle
//! - [`ReleaseContext`]: Per-run state handed to every phase

mod context;
mod error;
mod traits;

pub use context::ReleaseContext;
pub use error::{BoxError, PluginError, PluginResult};
pub use traits::Plugin;
pub use traits::hook::{Phase, ReleaseHook};
