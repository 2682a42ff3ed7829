//! Manifest version bump.

use hacs_release_config::HacsPluginConfig;
use hacs_release_plugin::ReleaseContext;
use tracing::{error, info};

use crate::manifest::update_manifest_version;
use crate::{HacsError, HacsResult, resolve_manifest_path};

/// Sets the Home Assistant manifest `version` to the next release version.
///
/// The manifest is re-read and re-parsed here rather than trusting an
/// earlier verification.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the context has no
/// next version, or the manifest cannot be read, parsed or written.
pub fn prepare(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<()> {
    let version = bump(config, ctx).inspect_err(|e| error!("{e}"))?;

    if ctx.dry_run {
        info!("Would update manifest.json version to {version}");
    } else {
        info!("Updated manifest.json version to {version}");
    }

    Ok(())
}

fn bump(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<String> {
    let manifest_path = resolve_manifest_path(config, ctx)?;
    let version = ctx
        .next_version
        .as_ref()
        .ok_or(HacsError::NextVersionMissing)?
        .to_string();

    update_manifest_version(&manifest_path, &version, ctx.dry_run)?;

    Ok(version)
}
