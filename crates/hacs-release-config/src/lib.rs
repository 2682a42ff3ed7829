//! Configuration management for the HACS release runner.
//!
//! This crate handles loading and validating the `hacs-release.toml`
//! configuration file and the plugin configuration it carries.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, find_config_file, load_config};
pub use schema::{Config, HacsPluginConfig};
