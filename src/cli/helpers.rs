//! Shared helper functions for CLI commands
//!
//! Configuration resolution with command-line overrides, answer input and
//! JSON output.

use acadeval_core::{error::Result, AppConfig, EvaluationStore};
use anyhow::Context;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Global options that override configuration values
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub knowledge_root: Option<PathBuf>,
}

/// Load configuration and apply command-line overrides
pub fn load_config(options: &GlobalOptions) -> Result<AppConfig> {
    let mut config = AppConfig::load(options.config_path.as_deref()).with_context(|| {
        match &options.config_path {
            Some(path) => format!("loading configuration from {}", path.display()),
            None => "loading configuration".to_string(),
        }
    })?;

    if let Some(path) = &options.history_path {
        config.history_path = path.clone();
    }
    if let Some(root) = &options.knowledge_root {
        config.knowledge_root = root.clone();
    }

    debug!(
        "Using history {} and knowledge root {}",
        config.history_path.display(),
        config.knowledge_root.display()
    );
    Ok(config)
}

/// Read the answer text from a file, or from stdin when no file is given
pub fn read_response(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading response from {}", path.display());
            let response = std::fs::read_to_string(path)
                .with_context(|| format!("reading response file {}", path.display()))?;
            Ok(response)
        }
        None => {
            debug!("Reading response from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading response from stdin")?;
            Ok(buffer)
        }
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Open the configured evaluation history
pub fn open_store(config: &AppConfig) -> Result<EvaluationStore> {
    let store = EvaluationStore::from_config(config).with_context(|| {
        format!(
            "opening evaluation history {}",
            config.history_path.display()
        )
    })?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acadeval_core::AcadevalError;
    use tempfile::TempDir;

    #[test]
    fn test_read_response_from_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("resposta.md");
        std::fs::write(&file, "A derivada mede a taxa de variação.").unwrap();

        let response = read_response(Some(&file)).unwrap();
        assert_eq!(response, "A derivada mede a taxa de variação.");
    }

    #[test]
    fn test_missing_response_file_names_the_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("ausente.md");

        let err = read_response(Some(&file)).unwrap_err();
        assert!(matches!(err, AcadevalError::Other(_)));
        let message = err.to_string();
        assert!(message.starts_with("reading response file"));
        assert!(message.contains("ausente.md"));
    }

    #[test]
    fn test_malformed_history_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let history = temp.path().join("history.json");
        std::fs::write(&history, "{ not json").unwrap();

        let config = AppConfig {
            history_path: history,
            ..AppConfig::default()
        };
        let message = open_store(&config).err().unwrap().to_string();
        assert!(message.contains("opening evaluation history"));
        assert!(message.contains("history.json"));
        assert!(message.contains("Serialization error"));
    }
}
