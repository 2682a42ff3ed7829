//! Manifest files read and written by the hook.
//!
//! Two JSON documents are involved:
//! - `hacs.json` at the working directory root, describing how HACS
//!   distributes the integration
//! - the Home Assistant `manifest.json` of the integration, whose `version`
//!   field is bumped on every release

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::format::detect_json_indent;
use crate::{HacsError, HacsResult};

/// File name of the HACS manifest.
pub const HACS_MANIFEST_FILE: &str = "hacs.json";

/// The subset of `hacs.json` the hook acts on. Unknown keys are ignored.
///
/// `zip_release` and `name` are only checked for presence, so any JSON value
/// (`null` included) counts once the key is there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HacsManifest {
    /// Requests a zip asset attached to the release.
    #[serde(default, deserialize_with = "present")]
    pub zip_release: Option<Value>,

    /// Name of the zip asset.
    #[serde(default)]
    pub filename: Option<String>,

    /// Display name of the integration.
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
}

/// Keeps a key that is present with a `null` value distinguishable from an
/// absent one.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl HacsManifest {
    /// Reads and parses `hacs.json` from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HacsError::HacsManifestMissing`] if the file does not exist
    /// and [`HacsError::HacsManifestUnparseable`] if it is not a valid
    /// HACS manifest.
    pub fn read(path: &Path) -> HacsResult<Self> {
        debug!(?path, "reading HACS manifest");

        if !path.exists() {
            return Err(HacsError::HacsManifestMissing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| HacsError::HacsManifestUnparseable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parses `hacs.json` content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object or `filename` is
    /// not a string.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Returns whether a zip release was requested.
    #[must_use]
    pub fn zip_release(&self) -> bool {
        self.zip_release.is_some()
    }

    /// Returns the zip asset name, if set and non-empty.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }

    /// Returns the integration name as text, if the key is present.
    ///
    /// Non-string names are rendered as JSON.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.name
            .as_ref()
            .map(|name| name.as_str().map_or_else(|| name.to_string(), str::to_owned))
    }
}

/// Parses Home Assistant manifest content into its top-level object.
///
/// # Errors
///
/// Returns [`HacsError::HaManifestUnparseable`] if the content is not JSON
/// or not a JSON object.
pub fn parse_ha_manifest(path: &Path, content: &str) -> HacsResult<Map<String, Value>> {
    let unparseable = |reason: String| HacsError::HaManifestUnparseable {
        path: path.to_path_buf(),
        reason,
    };

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(unparseable("not a JSON object".to_string())),
        Err(e) => Err(unparseable(e.to_string())),
    }
}

/// Sets `version` in Home Assistant manifest content.
///
/// The rest of the document is left untouched and re-serialized with the
/// indentation detected in `content`.
///
/// # Errors
///
/// Returns [`HacsError::HaManifestUnparseable`] if the content is not a JSON
/// object.
pub fn set_manifest_version(path: &Path, content: &str, version: &str) -> HacsResult<String> {
    let mut manifest = parse_ha_manifest(path, content)?;
    let indent = detect_json_indent(content);

    manifest.insert("version".to_string(), Value::String(version.to_string()));

    indent
        .render(&Value::Object(manifest))
        .map_err(|e| HacsError::HaManifestUnparseable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Updates `version` in the Home Assistant manifest at `path`.
///
/// Returns the new file content. Nothing is written when `dry_run` is set.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read or written
/// - The content is not a JSON object
pub fn update_manifest_version(path: &Path, version: &str, dry_run: bool) -> HacsResult<String> {
    if !path.exists() {
        return Err(HacsError::HaManifestMissing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let new_content = set_manifest_version(path, &content, version)?;

    if !dry_run {
        fs::write(path, &new_content)?;
    }

    Ok(new_content)
}
