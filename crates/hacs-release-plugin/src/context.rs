//! Release context shared between hooks.

use std::path::{Component, Path, PathBuf};

use semver::Version;

/// State passed to every lifecycle phase of a release run.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Directory all relative paths are resolved against.
    pub cwd: PathBuf,

    /// The version being released. Only known once the host has computed it.
    pub next_version: Option<Version>,

    /// Whether this is a dry run (no files are written).
    pub dry_run: bool,
}

impl ReleaseContext {
    /// Creates a new release context rooted at `cwd`.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            next_version: None,
            dry_run: false,
        }
    }

    /// Sets the version being released.
    #[must_use]
    pub fn with_next_version(mut self, version: Version) -> Self {
        self.next_version = Some(version);
        self
    }

    /// Sets the dry run flag.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolves a user-configured path against the working directory.
    ///
    /// An absolute `path` replaces the working directory entirely. Use
    /// [`resolve_within`](Self::resolve_within) for paths that must not
    /// leave it.
    #[must_use]
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.cwd.join(path)
    }

    /// Resolves a path that has to stay inside the working directory.
    ///
    /// Returns `None` if `path` is absolute or contains a `..` component.
    #[must_use]
    pub fn resolve_within(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        path.components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
            .then(|| self.cwd.join(path))
    }
}
