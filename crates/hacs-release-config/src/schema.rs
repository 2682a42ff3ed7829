//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HACS hook configuration.
    #[serde(default)]
    pub hacs: HacsPluginConfig,
}

/// HACS hook configuration.
///
/// Deserialized leniently so that a missing or empty `manifestPath` is
/// reported by [`HacsPluginConfig::validate`] instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HacsPluginConfig {
    /// Path to the Home Assistant `manifest.json`, relative to the working directory.
    #[serde(
        default,
        rename = "manifestPath",
        alias = "manifest_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub manifest_path: Option<String>,
}

impl HacsPluginConfig {
    /// Creates a configuration pointing at the given manifest.
    #[must_use]
    pub fn new(manifest_path: impl Into<String>) -> Self {
        Self {
            manifest_path: Some(manifest_path.into()),
        }
    }

    /// Returns the manifest path if it is set and non-empty.
    #[must_use]
    pub fn manifest_path(&self) -> Option<&str> {
        self.manifest_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Checks the configuration shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every issue found, one
    /// `✖ <message>` line followed by `  → at <field>` per issue.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut issues = Vec::new();

        match self.manifest_path.as_deref() {
            None => issues.push(("expected string, received nothing", "manifestPath")),
            Some("") => issues.push(("expected a non-empty string", "manifestPath")),
            Some(_) => {}
        }

        if issues.is_empty() {
            return Ok(());
        }

        let details = issues
            .iter()
            .map(|(message, field)| format!("✖ {message}\n  → at {field}"))
            .collect::<Vec<_>>()
            .join("\n");

        Err(ConfigError::Invalid(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.hacs.manifest_path.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let toml = r#"
            [hacs]
            manifestPath = "custom_components/demo/manifest.json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.hacs.manifest_path(),
            Some("custom_components/demo/manifest.json")
        );
    }

    #[test]
    fn test_deserialize_snake_case_alias() {
        let toml = r#"
            [hacs]
            manifest_path = "manifest.json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.hacs.manifest_path(), Some("manifest.json"));
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.hacs.manifest_path().is_none());
    }

    #[test]
    fn test_deserialize_from_json_plugin_config() {
        let config: HacsPluginConfig =
            serde_json::from_str(r#"{"manifestPath":"manifest.json"}"#).unwrap();
        assert_eq!(config, HacsPluginConfig::new("manifest.json"));
    }

    #[test]
    fn test_validate_ok() {
        assert!(HacsPluginConfig::new("manifest.json").validate().is_ok());
    }

    #[test]
    fn test_validate_missing() {
        let err = HacsPluginConfig::default().validate().unwrap_err();
        match err {
            ConfigError::Invalid(details) => {
                assert_eq!(details, "✖ expected string, received nothing\n  → at manifestPath");
            }
            other => panic!("Expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty() {
        let err = HacsPluginConfig::new("").validate().unwrap_err();
        assert!(err.to_string().contains("expected a non-empty string"));
        assert!(err.to_string().contains("→ at manifestPath"));
    }

    #[test]
    fn test_manifest_path_hides_empty() {
        assert!(HacsPluginConfig::new("").manifest_path().is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let out = toml::to_string(&HacsPluginConfig::new("manifest.json")).unwrap();
        assert_eq!(out.trim(), r#"manifestPath = "manifest.json""#);
    }
}
