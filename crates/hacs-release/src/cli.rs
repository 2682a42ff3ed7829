//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Run the HACS release hooks: verify, bump manifest.json, zip the integration.
#[derive(Debug, Parser)]
#[command(name = "hacs-release")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Configuration file (defaults to the nearest hacs-release.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the Home Assistant manifest.json, overriding the configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that hacs.json and manifest.json are present and valid
    Verify,

    /// Set the manifest.json version
    Prepare(commands::prepare::PrepareArgs),

    /// Create the zip release if hacs.json asks for one
    Publish(commands::publish::PublishArgs),

    /// Run verify, prepare and publish in order
    Release(commands::release::ReleaseArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let session = commands::Session::load(
            self.directory,
            self.config.as_deref(),
            self.manifest_path,
        )?;

        match self.command {
            Commands::Verify => commands::verify::run(&session),
            Commands::Prepare(args) => commands::prepare::run(&session, &args),
            Commands::Publish(args) => commands::publish::run(&session, &args),
            Commands::Release(args) => commands::release::run(&session, &args),
        }
    }
}
