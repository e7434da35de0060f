//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.calculator.toml` in the working directory
//! 4. `~/.config/calculator/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// How results are printed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Unset means "not configured at this layer".
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with layering.
    ///
    /// Reads the global config, then `.calculator.toml` in `work_dir`, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config.merge(Self::load_file(&global_path)?);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                tracing::debug!(path = %local_path.display(), "loading local config");
                config.merge(Self::load_file(&local_path)?);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Output format after all layers, falling back to the built-in default.
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another layer into this one; values set in `other` win.
    fn merge(&mut self, other: Config) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = Some(format),
                Err(_) => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_FORMAT
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, None);
        assert_eq!(config.output_format(), OutputFormat::Terminal);
    }

    #[test]
    fn parse_toml_config() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn merge_overrides_set_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.output.format = Some(OutputFormat::Json);

        base.merge(other);
        assert_eq!(base.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn merge_keeps_base_when_other_is_unset() {
        let mut base = Config::default();
        base.output.format = Some(OutputFormat::Json);

        base.merge(Config::default());
        assert_eq!(base.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn parse_error_message_leaves_cause_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        let cause = std::error::Error::source(&err).expect("toml error as source");
        assert_eq!(err.to_string(), format!("failed to parse config file {}", path.display()));
        assert!(!err.to_string().contains(&cause.to_string()));
    }

    #[test]
    fn load_file_unknown_format_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

        assert!(matches!(
            Config::load_file(&path),
            Err(ConfigError::ParseFile { .. })
        ));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".calculator.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn env_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".calculator.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let env = Env::mock([("CALCULATOR_FORMAT", "terminal")]);
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Terminal);
    }

    #[test]
    fn apply_env_vars_invalid_format_is_ignored() {
        let env = Env::mock([("CALCULATOR_FORMAT", "yaml")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.output.format, None);
    }
}
