//! HACS hook error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the HACS hook phases.
#[derive(Debug, Error)]
pub enum HacsError {
    /// The plugin configuration failed validation.
    #[error("invalid config:\n{details}")]
    ConfigInvalid {
        /// Formatted validation issues.
        details: String,
    },

    /// `hacs.json` does not exist.
    #[error("hacs.json not found at {}", .0.display())]
    HacsManifestMissing(PathBuf),

    /// `hacs.json` exists but is not a valid HACS manifest.
    #[error("could not parse {}: {reason}", .path.display())]
    HacsManifestUnparseable {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying parse error.
        reason: String,
    },

    /// The Home Assistant manifest does not exist.
    #[error("Home Assistant manifest not found at {}", .0.display())]
    HaManifestMissing(PathBuf),

    /// The Home Assistant manifest is not a JSON object.
    #[error("could not parse Home Assistant manifest {}: {reason}", .path.display())]
    HaManifestUnparseable {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying parse error.
        reason: String,
    },

    /// `zip_release` is set but `filename` is not.
    #[error("no filename set in hacs.json")]
    HacsFilenameMissing,

    /// `filename` would place the archive outside the working directory.
    #[error("filename {0:?} in hacs.json must be a relative path inside the working directory")]
    HacsFilenameInvalid(String),

    /// `zip_release` is set but `name` is not.
    #[error("no name set in hacs.json")]
    HacsNameMissing,

    /// `prepare` ran without a next version in the context.
    #[error("no next release version available")]
    NextVersionMissing,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Archive writer error.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Result type for HACS hook operations.
pub type HacsResult<T> = Result<T, HacsError>;
