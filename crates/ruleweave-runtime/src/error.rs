//! Runtime error types

use ruleweave_core::CoreError;
use thiserror::Error;

/// Evaluation error
///
/// Always distinct from a rule that evaluated to `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Ordering comparison across types, or a record value that cannot be compared
    #[error("Type mismatch: cannot evaluate {field} ({actual}) {operator} {expected}")]
    TypeMismatch {
        field: String,
        operator: String,
        actual: &'static str,
        expected: &'static str,
    },

    /// A stored tree could not be decoded for evaluation
    ///
    /// Covers unknown operators and connectives, unsupported schema
    /// versions and over-deep trees.
    #[error("Invalid rule document: {0}")]
    InvalidDocument(String),
}

impl From<CoreError> for RuntimeError {
    fn from(err: CoreError) -> Self {
        RuntimeError::InvalidDocument(err.to_string())
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
