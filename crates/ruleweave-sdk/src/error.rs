//! SDK error types

use ruleweave_repository::RepositoryError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rule text could not be parsed or combined
    #[error(transparent)]
    InvalidRule(#[from] ruleweave_parser::ParseError),

    /// Tree could not be evaluated against the record
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] ruleweave_runtime::RuntimeError),

    /// No stored rule with this identifier
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Storage backend failure
    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RepositoryError> for SdkError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => SdkError::NotFound(id),
            RepositoryError::Config(msg) => SdkError::Config(msg),
            other => SdkError::Repository(other),
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
