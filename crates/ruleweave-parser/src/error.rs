//! Parser error types
//!
//! Every variant describes a malformed rule; callers treat them all as an
//! invalid-rule rejection.

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Rule text has no tokens
    #[error("Invalid rule: rule text is empty")]
    EmptyRule,

    /// `(` without `)` or `)` without `(`
    #[error("Invalid rule: unbalanced parentheses at token {position}")]
    UnbalancedParentheses { position: usize },

    /// `()` with nothing inside
    #[error("Invalid rule: empty parentheses at token {position}")]
    EmptyGroup { position: usize },

    /// A comparison is missing its operator or value
    #[error("Invalid rule: incomplete comparison for field '{field}'")]
    IncompleteComparison { field: String },

    /// Comparison operator other than `>`, `<`, `=`
    #[error("Invalid rule: unsupported operator '{operator}' for field '{field}'")]
    UnsupportedOperator { field: String, operator: String },

    /// `AND`/`OR` without an operand on one side
    #[error("Invalid rule: {connective} is missing its {side} operand")]
    MissingOperand {
        connective: String,
        side: &'static str,
    },

    /// Two operands with no connective between them
    #[error("Invalid rule: expected AND or OR before '{found}'")]
    MissingConnective { found: String },

    /// Tree or parenthesis nesting beyond `MAX_TREE_DEPTH`
    #[error("Invalid rule: nesting exceeds the maximum depth of {max}")]
    TooDeep { max: usize },

    /// Combining an empty list of rules
    #[error("Invalid rule: no rules to combine")]
    NoRules,

    /// One rule of a combine request failed to parse
    #[error("Rule #{index}: {source}")]
    InRule {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
