//! HACS hook plugin.
//!
//! Releases a Home Assistant custom integration distributed through HACS:
//! - verify: `hacs.json` and the integration `manifest.json` exist and parse
//! - prepare: bumps `version` in `manifest.json`, keeping its indentation
//! - publish: zips the integration directory when `hacs.json` sets
//!   `zip_release`

mod archive;
mod error;
mod format;
mod manifest;
mod prepare;
mod publish;
mod verify;

use std::path::PathBuf;

use hacs_release_config::{ConfigError, HacsPluginConfig};
use hacs_release_plugin::{Plugin, PluginError, PluginResult, ReleaseContext, ReleaseHook};

pub use archive::zip_directory;
pub use error::{HacsError, HacsResult};
pub use format::{JsonIndent, detect_json_indent};
pub use manifest::{
    HACS_MANIFEST_FILE, HacsManifest, parse_ha_manifest, set_manifest_version,
    update_manifest_version,
};
pub use prepare::prepare;
pub use publish::publish;
pub use verify::verify_conditions;

/// HACS hook for Home Assistant custom integrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct HacsHook;

impl HacsHook {
    /// Creates a new HACS hook.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for HacsHook {
    fn name(&self) -> &'static str {
        "hacs"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Updates manifest.json version and optionally creates a HACS zip release"
    }
}

impl ReleaseHook for HacsHook {
    type Config = HacsPluginConfig;

    fn verify_conditions(&self, config: &HacsPluginConfig, ctx: &ReleaseContext) -> PluginResult<()> {
        verify::verify_conditions(config, ctx).map_err(|e| PluginError::VerifyFailed(Box::new(e)))
    }

    fn prepare(&self, config: &HacsPluginConfig, ctx: &ReleaseContext) -> PluginResult<()> {
        prepare::prepare(config, ctx).map_err(|e| PluginError::PrepareFailed(Box::new(e)))
    }

    fn publish(&self, config: &HacsPluginConfig, ctx: &ReleaseContext) -> PluginResult<()> {
        publish::publish(config, ctx)
            .map(|_| ())
            .map_err(|e| PluginError::PublishFailed(Box::new(e)))
    }
}

/// Validates `config` and resolves the manifest path against the context.
fn resolve_manifest_path(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<PathBuf> {
    config.validate().map_err(|e| HacsError::ConfigInvalid {
        details: match e {
            ConfigError::Invalid(details) => details,
            other => other.to_string(),
        },
    })?;

    config
        .manifest_path()
        .map(|path| ctx.resolve(path))
        .ok_or_else(|| HacsError::ConfigInvalid {
            details: "✖ expected a non-empty string\n  → at manifestPath".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use semver::Version;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_plugin_name() {
        assert_eq!(HacsHook::new().name(), "hacs");
    }

    #[test]
    fn test_plugin_version() {
        assert_eq!(HacsHook::new().version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_plugin_description() {
        assert_eq!(
            HacsHook::default().description(),
            "Updates manifest.json version and optionally creates a HACS zip release"
        );
    }

    #[test]
    fn test_resolve_manifest_path() {
        let ctx = ReleaseContext::new("/work");
        let path = resolve_manifest_path(&HacsPluginConfig::new("a/manifest.json"), &ctx).unwrap();
        assert_eq!(path, PathBuf::from("/work/a/manifest.json"));
    }

    #[test]
    fn test_resolve_manifest_path_invalid() {
        let ctx = ReleaseContext::new("/work");
        let err = resolve_manifest_path(&HacsPluginConfig::default(), &ctx).unwrap_err();
        assert!(matches!(err, HacsError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_verify_failure_keeps_hacs_error() {
        let dir = TempDir::new().unwrap();
        let ctx = ReleaseContext::new(dir.path());

        let err = HacsHook::new()
            .verify_conditions(&HacsPluginConfig::new("manifest.json"), &ctx)
            .unwrap_err();

        assert!(matches!(err, PluginError::VerifyFailed(_)));
        let source = err.hook_error().downcast_ref::<HacsError>();
        assert!(matches!(source, Some(HacsError::HacsManifestMissing(_))));
    }

    #[test]
    fn test_prepare_through_trait() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("manifest.json"), "{\"version\":\"0.0.1\"}").unwrap();
        let ctx = ReleaseContext::new(dir.path()).with_next_version(Version::new(0, 1, 0));

        HacsHook::new()
            .prepare(&HacsPluginConfig::new("manifest.json"), &ctx)
            .unwrap();

        let content = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
        assert_eq!(content, "{\"version\":\"0.1.0\"}");
    }

    #[test]
    fn test_publish_failure_is_publish_failed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(HACS_MANIFEST_FILE), r#"{"zip_release":true}"#).unwrap();
        let ctx = ReleaseContext::new(dir.path());

        let err = HacsHook::new()
            .publish(&HacsPluginConfig::new("manifest.json"), &ctx)
            .unwrap_err();

        assert!(matches!(err, PluginError::PublishFailed(_)));
    }
}
