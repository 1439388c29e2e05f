//! Error types for the acadeval evaluator
//!
//! Structured error definitions use thiserror; anyhow is only accepted at the
//! binary boundary and converted into [`AcadevalError::Other`].

use thiserror::Error;

/// Main error type for acadeval operations
#[derive(Error, Debug)]
pub enum AcadevalError {
    /// I/O error (history file, knowledge directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unwritable JSON document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Subject metadata could not be written as YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Subject folder does not exist in the knowledge base
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    /// Subject name cannot be turned into a usable code
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    /// Resource already exists
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for acadeval operations
pub type Result<T> = std::result::Result<T, AcadevalError>;

/// Convert anyhow::Error to AcadevalError, keeping the context chain
impl From<anyhow::Error> for AcadevalError {
    fn from(err: anyhow::Error) -> Self {
        AcadevalError::Other(format!("{:#}", err))
    }
}
