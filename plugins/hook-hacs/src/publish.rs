//! Zip release publishing.

use std::path::PathBuf;

use hacs_release_config::HacsPluginConfig;
use hacs_release_plugin::ReleaseContext;
use tracing::{error, info};

use crate::archive::zip_directory;
use crate::manifest::{HACS_MANIFEST_FILE, HacsManifest};
use crate::{HacsError, HacsResult, resolve_manifest_path};

/// Zips the integration directory when `hacs.json` asks for a zip release.
///
/// Any `zip_release` value requests the archive; only a missing key skips
/// it. The directory containing the Home Assistant manifest is archived,
/// without its own name as a prefix, to `<cwd>/<filename>`. Returns the
/// archive path, or `None` when no zip release is requested or this is a
/// dry run.
///
/// # Errors
///
/// Returns an error if `hacs.json` is missing or invalid, if `zip_release`
/// is set without `filename` or `name`, if `filename` leaves the working
/// directory, or if the archive cannot be written.
pub fn publish(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<Option<PathBuf>> {
    publish_zip(config, ctx).inspect_err(|e| error!("{e}"))
}

fn publish_zip(config: &HacsPluginConfig, ctx: &ReleaseContext) -> HacsResult<Option<PathBuf>> {
    let hacs = HacsManifest::read(&ctx.resolve(HACS_MANIFEST_FILE))?;

    if !hacs.zip_release() {
        info!("zip_release is not set - skipping publish step");
        return Ok(None);
    }

    let filename = hacs.filename().ok_or(HacsError::HacsFilenameMissing)?;
    let name = hacs.name().ok_or(HacsError::HacsNameMissing)?;
    let output = ctx
        .resolve_within(filename)
        .ok_or_else(|| HacsError::HacsFilenameInvalid(filename.to_string()))?;

    let manifest_path = resolve_manifest_path(config, ctx)?;
    let content_dir = match manifest_path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => ctx.cwd.clone(),
    };

    if ctx.dry_run {
        info!(
            %name,
            source = %content_dir.display(),
            "Would create {filename} archive"
        );
        return Ok(None);
    }

    let files = zip_directory(&content_dir, &output)?;
    info!(%name, files, "Created {filename} archive with files");

    Ok(Some(output))
}
