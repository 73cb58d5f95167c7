//! Versioned persistence format for expression trees
//!
//! A stored rule tree is a plain nested document:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "tree": {
//!     "type": "connective",
//!     "connective": "OR",
//!     "left":  { "type": "comparison", "field": "age", "operator": ">", "value": 30.0 },
//!     "right": { "type": "comparison", "field": "department", "operator": "=", "value": "Sales" }
//!   }
//! }
//! ```

use crate::ast::{ExpressionNode, MAX_TREE_DEPTH};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Schema version written by this crate
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// A serializable, versioned wrapper around one expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    pub schema_version: u32,
    pub tree: ExpressionNode,
}

impl RuleDocument {
    /// Wrap a tree at the current schema version
    pub fn new(tree: ExpressionNode) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            tree,
        }
    }

    /// Reject documents written by an unknown schema version or holding a
    /// tree deeper than [`MAX_TREE_DEPTH`]
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != CURRENT_SCHEMA_VERSION {
            log::warn!(
                "rejecting rule document with schema version {}",
                self.schema_version
            );
            return Err(CoreError::UnsupportedSchemaVersion {
                found: self.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        let depth = self.tree.depth();
        if depth > MAX_TREE_DEPTH {
            return Err(CoreError::TreeTooDeep {
                depth,
                max: MAX_TREE_DEPTH,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RuleDocument = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let doc: RuleDocument = serde_json::from_value(value)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn into_tree(self) -> ExpressionNode {
        self.tree
    }
}

impl From<ExpressionNode> for RuleDocument {
    fn from(tree: ExpressionNode) -> Self {
        RuleDocument::new(tree)
    }
}
