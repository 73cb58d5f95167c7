//! Expression tree definitions for Ruleweave
//!
//! A parsed rule is a binary tree:
//! - Comparison leaves test one record field against one literal
//! - Connective nodes join two sub-trees with `AND` or `OR`

pub mod literal;
pub mod node;
pub mod operator;

pub use literal::Literal;
pub use node::{ExpressionNode, MAX_TREE_DEPTH};
pub use operator::{ComparisonOp, Connective};
