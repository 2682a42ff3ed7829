//! Subcommands.

pub mod prepare;
pub mod publish;
pub mod release;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hacs_release_config::{Config, HacsPluginConfig, find_and_load_config_from, load_config};
use hacs_release_hook_hacs::HacsHook;
use hacs_release_plugin::{Phase, Plugin, ReleaseContext, ReleaseHook};
use tracing::{debug, info};

/// Working directory and plugin configuration shared by every subcommand.
#[derive(Debug)]
pub struct Session {
    pub cwd: PathBuf,
    pub config: HacsPluginConfig,
    pub hook: HacsHook,
}

impl Session {
    /// Resolves the working directory and loads the configuration.
    ///
    /// An explicit `config_path` must exist. Otherwise the nearest
    /// `hacs-release.toml` is used if there is one.
    pub fn load(
        directory: Option<PathBuf>,
        config_path: Option<&Path>,
        manifest_path: Option<String>,
    ) -> Result<Self> {
        let cwd = match directory {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to get current directory")?,
        };

        let mut config = match config_path {
            Some(path) => load_config(cwd.join(path)).context("failed to load configuration")?,
            None => find_and_load_config_from(&cwd)
                .context("failed to load configuration")?
                .unwrap_or_else(|| {
                    debug!("using default configuration");
                    Config::default()
                }),
        };

        if let Some(manifest_path) = manifest_path {
            config.hacs.manifest_path = Some(manifest_path);
        }

        Ok(Self {
            cwd,
            config: config.hacs,
            hook: HacsHook::new(),
        })
    }

    /// Creates a release context rooted at the session directory.
    pub fn context(&self) -> ReleaseContext {
        ReleaseContext::new(&self.cwd)
    }

    /// Runs a single phase of the hook.
    pub fn run_phase(&self, phase: Phase, ctx: &ReleaseContext) -> Result<()> {
        info!(phase = %phase, plugin = self.hook.name(), "running phase");
        self.hook
            .run_phase(phase, &self.config, ctx)
            .with_context(|| format!("{phase} phase failed"))
    }
}
