//! Ruleweave Parser - rule text to expression tree
//!
//! This crate turns human-readable rule text such as
//! `age > 30 AND department = 'Sales'` into an [`ExpressionNode`] tree,
//! and merges several rules into one tree.
//!
//! [`ExpressionNode`]: ruleweave_core::ExpressionNode

pub mod combiner;
pub mod error;
pub mod parser;
pub mod tokenizer;

// Re-export main parser types
pub use combiner::{ConnectiveTally, RuleCombiner};
pub use error::{ParseError, Result};
pub use parser::RuleParser;
pub use tokenizer::{tokenize, Token};
