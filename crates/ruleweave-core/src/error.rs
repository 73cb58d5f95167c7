//! Error types for Ruleweave Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown comparison operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown connective: {0}")]
    UnknownConnective(String),

    #[error("Unsupported schema version {found} (supported: {supported})")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },

    #[error("Rule tree depth {depth} exceeds the maximum of {max}")]
    TreeTooDeep { depth: usize, max: usize },

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
