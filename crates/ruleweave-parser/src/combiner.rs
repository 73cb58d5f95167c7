//! Multi-rule combination
//!
//! Rules are parsed independently, then folded left to right under the
//! connective that occurs most often across all of them:
//!
//! ```text
//! ["age > 30", "department = 'Sales'", "salary > 50000 OR experience > 5"]
//!   tally: AND = 0, OR = 1  →  dominant OR
//!   result: ((age > 30 OR department = 'Sales') OR (salary > 50000 OR experience > 5))
//! ```

use crate::error::{ParseError, Result};
use crate::parser::RuleParser;
use ruleweave_core::{Connective, ExpressionNode, MAX_TREE_DEPTH};

/// Occurrences of each connective across a set of trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectiveTally {
    pub and: usize,
    pub or: usize,
}

impl ConnectiveTally {
    /// Count connective nodes across all trees
    pub fn from_trees<'a>(trees: impl IntoIterator<Item = &'a ExpressionNode>) -> Self {
        trees
            .into_iter()
            .fold(Self::default(), |tally, tree| Self {
                and: tally.and + tree.connective_count(Connective::And),
                or: tally.or + tree.connective_count(Connective::Or),
            })
    }

    /// The more frequent connective; ties go to `AND`
    pub fn dominant(&self) -> Connective {
        if self.and >= self.or {
            Connective::And
        } else {
            Connective::Or
        }
    }
}

/// Rule combiner
pub struct RuleCombiner;

impl RuleCombiner {
    /// Parse and combine rule texts into a single tree
    pub fn combine<S: AsRef<str>>(rules: &[S]) -> Result<ExpressionNode> {
        let trees = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                RuleParser::parse(rule.as_ref()).map_err(|source| ParseError::InRule {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::combine_trees(trees)
    }

    /// Combine already parsed trees
    ///
    /// A single tree is returned unchanged. Fails with
    /// [`ParseError::TooDeep`] when the folded tree would exceed
    /// [`MAX_TREE_DEPTH`].
    pub fn combine_trees(trees: Vec<ExpressionNode>) -> Result<ExpressionNode> {
        let tally = ConnectiveTally::from_trees(&trees);
        let dominant = tally.dominant();
        log::debug!(
            "combining {} rules (AND={}, OR={}) with {}",
            trees.len(),
            tally.and,
            tally.or,
            dominant
        );

        let mut trees = trees.into_iter();
        let mut combined = trees.next().ok_or(ParseError::NoRules)?;
        let mut depth = combined.depth();

        for next in trees {
            depth = 1 + depth.max(next.depth());
            if depth > MAX_TREE_DEPTH {
                break;
            }
            combined = ExpressionNode::connective(dominant, combined, next);
        }

        if depth > MAX_TREE_DEPTH {
            return Err(ParseError::TooDeep {
                max: MAX_TREE_DEPTH,
            });
        }
        Ok(combined)
    }
}
