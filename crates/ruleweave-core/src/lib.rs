//! Ruleweave Core - Core types and definitions for the Ruleweave rule engine
//!
//! This crate provides the fundamental types used across the Ruleweave crates:
//! - Expression tree definitions (comparison leaves and connective nodes)
//! - Value types for record data
//! - The versioned document format used to persist trees
//! - Error types

pub mod ast;
pub mod document;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{ComparisonOp, Connective, ExpressionNode, Literal, MAX_TREE_DEPTH};
pub use document::{RuleDocument, CURRENT_SCHEMA_VERSION};
pub use error::CoreError;
pub use types::{Record, Value};
