//! Precondition checks run before any file is modified.

use std::fs;

use hacs_release_config::HacsPluginConfig;
use hacs_release_plugin::ReleaseContext;
use tracing::{error, info};

use crate::manifest::{HACS_MANIFEST_FILE, parse_ha_manifest};
use crate::{HacsError, HacsResult, resolve_manifest_path};

/// Verifies that the release can proceed.
///
/// Checks, in order, stopping at the first failure:
/// 1. The plugin configuration is valid
/// 2. `hacs.json` exists in the working directory
/// 3. The Home Assistant manifest exists
/// 4. The Home Assistant manifest is a JSON object
///
/// # Errors
///
/// Returns the [`HacsError`] of the first failed check.
pub fn verify_conditions(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<()> {
    check(config, ctx).inspect_err(|e| error!("{e}"))?;
    info!("hacs.json and manifest.json files verified");
    Ok(())
}

fn check(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<()> {
    let manifest_path = resolve_manifest_path(config, ctx)?;

    let hacs_path = ctx.resolve(HACS_MANIFEST_FILE);
    if !hacs_path.exists() {
        return Err(HacsError::HacsManifestMissing(hacs_path));
    }

    if !manifest_path.exists() {
        return Err(HacsError::HaManifestMissing(manifest_path));
    }

    let content =
        fs::read_to_string(&manifest_path).map_err(|e| HacsError::HaManifestUnparseable {
            path: manifest_path.clone(),
            reason: e.to_string(),
        })?;
    parse_ha_manifest(&manifest_path, &content)?;

    Ok(())
}
