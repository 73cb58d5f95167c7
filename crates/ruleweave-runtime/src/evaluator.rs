//! Expression tree evaluator

use crate::error::Result;
use crate::operators::execute_compare;
use ruleweave_core::{Connective, ExpressionNode, Record, RuleDocument};

/// Evaluates expression trees against records
pub struct Evaluator;

impl Evaluator {
    /// Evaluate a tree against a record
    ///
    /// Connectives short-circuit: comparisons have no side effects, so the
    /// right operand is skipped once the result is decided. A type mismatch
    /// in a skipped operand is therefore not reported.
    pub fn evaluate(node: &ExpressionNode, record: &Record) -> Result<bool> {
        match node {
            ExpressionNode::Comparison {
                field,
                operator,
                value,
            } => execute_compare(field, record.get(field), *operator, value),
            ExpressionNode::Connective {
                connective,
                left,
                right,
            } => {
                let left = Self::evaluate(left, record)?;
                match (connective, left) {
                    (Connective::And, false) => Ok(false),
                    (Connective::Or, true) => Ok(true),
                    _ => Self::evaluate(right, record),
                }
            }
        }
    }

    /// Decode a stored document and evaluate it
    pub fn evaluate_document(document: serde_json::Value, record: &Record) -> Result<bool> {
        let document = RuleDocument::from_value(document)?;
        let result = Self::evaluate(&document.tree, record)?;
        tracing::debug!(
            leaves = document.tree.leaf_count(),
            result,
            "evaluated stored rule document"
        );
        Ok(result)
    }
}
