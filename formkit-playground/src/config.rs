//! Layered playground configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `formkit.toml`, then `formkit.yaml`, in the working directory
//! 3. `FORMKIT_*` environment variables
//! 4. Command line flags

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::format::FileFormat;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: Box<figment::Error> },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

pub const TOML_FILE: &str = "formkit.toml";
pub const YAML_FILE: &str = "formkit.yaml";
pub const ENV_PREFIX: &str = "FORMKIT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// `tracing` filter directive used when `--debug` is not given
    pub log_filter: Option<String>,
    /// Output format of CLI commands
    pub format: FileFormat,
    /// Default schema file
    pub schema: Option<PathBuf>,
    /// Default data file
    pub data: Option<PathBuf>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            format: FileFormat::Json,
            schema: None,
            data: None,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FileFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
}

impl PlaygroundConfig {
    /// Load configuration with `dir` as the working directory.
    pub fn load(dir: &Path, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: PlaygroundConfig = Self::figment(dir, overrides).extract()?;
        debug!(
            format = %config.format,
            schema = ?config.schema,
            data = ?config.data,
            "configuration loaded"
        );
        Ok(config)
    }

    fn figment(dir: &Path, overrides: &ConfigOverrides) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(PlaygroundConfig::default()))
            .merge(Toml::file(dir.join(TOML_FILE)))
            .merge(Yaml::file(dir.join(YAML_FILE)))
            .merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
            .merge(Serialized::defaults(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = PlaygroundConfig::load(dir.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    #[serial]
    fn test_yaml_overrides_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TOML_FILE), "format = \"yaml\"\nschema = \"a.json\"\n").unwrap();
        fs::write(dir.path().join(YAML_FILE), "schema: b.json\n").unwrap();

        let config = PlaygroundConfig::load(dir.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.format, FileFormat::Yaml);
        assert_eq!(config.schema, Some(PathBuf::from("b.json")));
    }

    #[test]
    #[serial]
    fn test_env_and_cli_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TOML_FILE), "data = \"file.json\"\n").unwrap();
        std::env::set_var("FORMKIT_DATA", "env.json");
        std::env::set_var("FORMKIT_LOG_FILTER", "formkit=trace");

        let config = PlaygroundConfig::load(dir.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.data, Some(PathBuf::from("env.json")));
        assert_eq!(config.log_filter.as_deref(), Some("formkit=trace"));

        let overrides = ConfigOverrides {
            data: Some(PathBuf::from("cli.json")),
            ..Default::default()
        };
        let config = PlaygroundConfig::load(dir.path(), &overrides).unwrap();
        assert_eq!(config.data, Some(PathBuf::from("cli.json")));

        std::env::remove_var("FORMKIT_DATA");
        std::env::remove_var("FORMKIT_LOG_FILTER");
    }

    #[test]
    #[serial]
    fn test_invalid_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TOML_FILE), "format = \"xml\"\n").unwrap();
        assert!(PlaygroundConfig::load(dir.path(), &ConfigOverrides::default()).is_err());
    }
}
