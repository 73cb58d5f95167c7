//! Expression tree nodes

use super::literal::Literal;
use super::operator::{ComparisonOp, Connective};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deepest tree accepted by the parser, the combiner and the document decoder
///
/// Leaves count as depth 1. Kept well below the nesting limit of the
/// serde_json and serde_yaml decoders so every accepted tree loads back.
pub const MAX_TREE_DEPTH: usize = 64;

/// Expression tree node
///
/// Children are owned exclusively by their parent, so a tree has no sharing,
/// no cycles and no missing children. Trees are never edited in place;
/// combining rules builds a new root over the existing trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpressionNode {
    /// `field operator value`, e.g. `age > 30`
    Comparison {
        field: String,
        operator: ComparisonOp,
        value: Literal,
    },

    /// `left AND right` / `left OR right`
    Connective {
        connective: Connective,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Create a comparison leaf
    pub fn comparison(
        field: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Literal>,
    ) -> Self {
        ExpressionNode::Comparison {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Create a connective node
    pub fn connective(connective: Connective, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Connective {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::connective(Connective::And, left, right)
    }

    pub fn or(left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::connective(Connective::Or, left, right)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, ExpressionNode::Comparison { .. })
    }

    /// Height of the tree; a single leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Comparison { .. } => 1,
            ExpressionNode::Connective { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of comparison leaves
    pub fn leaf_count(&self) -> usize {
        match self {
            ExpressionNode::Comparison { .. } => 1,
            ExpressionNode::Connective { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of connective nodes of the given kind
    pub fn connective_count(&self, kind: Connective) -> usize {
        match self {
            ExpressionNode::Comparison { .. } => 0,
            ExpressionNode::Connective {
                connective,
                left,
                right,
            } => {
                let here = usize::from(*connective == kind);
                here + left.connective_count(kind) + right.connective_count(kind)
            }
        }
    }

    /// Field names referenced by the tree, left to right, without duplicates
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ExpressionNode::Comparison { field, .. } => {
                if !out.contains(&field.as_str()) {
                    out.push(field.as_str());
                }
            }
            ExpressionNode::Connective { left, right, .. } => {
                left.collect_fields(out);
                right.collect_fields(out);
            }
        }
    }
}

/// Renders the tree back into rule text.
///
/// Nested connectives are parenthesised so the output parses back into the
/// same tree. String literals containing whitespace or parentheses cannot be
/// written back faithfully, since rule text has no escaping.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Comparison {
                field,
                operator,
                value,
            } => write!(f, "{} {} {}", field, operator, value),
            ExpressionNode::Connective {
                connective,
                left,
                right,
            } => {
                write_operand(f, left)?;
                write!(f, " {} ", connective)?;
                write_operand(f, right)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, node: &ExpressionNode) -> fmt::Result {
    if node.is_comparison() {
        write!(f, "{}", node)
    } else {
        write!(f, "({})", node)
    }
}
