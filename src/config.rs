//! Layered configuration for acadeval
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. User config file (`<config dir>/acadeval/acadeval.toml`)
//! 3. Project config file (`./acadeval.toml`, or an explicit path)
//! 4. Environment variables prefixed `ACADEVAL__` (e.g. `ACADEVAL__HISTORY_PATH`)

use crate::error::{AcadevalError, Result};
use crate::evaluation::statistics::DEFAULT_STATISTICS_WINDOW;
use crate::subjects::{SubjectCatalog, SubjectProfile};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ACADEVAL";

/// Project-local config file name
pub const CONFIG_FILE_NAME: &str = "acadeval.toml";

fn default_history_path() -> PathBuf {
    PathBuf::from("logs").join("evaluation_history.json")
}

fn default_knowledge_root() -> PathBuf {
    PathBuf::from("knowledge")
}

fn default_statistics_window() -> usize {
    DEFAULT_STATISTICS_WINDOW
}

fn default_recent_limit() -> usize {
    20
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON file holding the evaluation history
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// Directory with one sub-directory per subject
    #[serde(default = "default_knowledge_root")]
    pub knowledge_root: PathBuf,

    /// Number of most recent evaluations aggregated into statistics
    #[serde(default = "default_statistics_window")]
    pub statistics_window: usize,

    /// Default number of records listed by `recent`
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Subject profiles added to (or replacing) the built-in ones
    #[serde(default)]
    pub subjects: BTreeMap<String, SubjectProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            knowledge_root: default_knowledge_root(),
            statistics_window: default_statistics_window(),
            recent_limit: default_recent_limit(),
            subjects: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source
    ///
    /// An explicit `path` must exist; the default locations are optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(user_file) = dirs::config_dir().map(|d| d.join("acadeval").join(CONFIG_FILE_NAME)) {
            builder = builder.add_source(
                File::from(user_file.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = match path {
            Some(explicit) => {
                debug!("Using config file {}", explicit.display());
                builder.add_source(File::from(explicit).format(FileFormat::Toml).required(true))
            }
            None => builder.add_source(
                File::from(Path::new(CONFIG_FILE_NAME))
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let config: AppConfig = builder
            .add_source(env_source())
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no other sources)
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.statistics_window == 0 {
            return Err(invalid("statistics_window must be at least 1"));
        }
        if self.recent_limit == 0 {
            return Err(invalid("recent_limit must be at least 1"));
        }
        if self.history_path.as_os_str().is_empty() {
            return Err(invalid("history_path cannot be empty"));
        }
        Ok(())
    }

    /// Built-in subject catalog merged with configured profiles
    pub fn subject_catalog(&self) -> SubjectCatalog {
        SubjectCatalog::with_overrides(&self.subjects)
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AcadevalError::Other(e.to_string()))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn invalid(message: &str) -> AcadevalError {
    AcadevalError::Config(config::ConfigError::Message(message.to_string()))
}
