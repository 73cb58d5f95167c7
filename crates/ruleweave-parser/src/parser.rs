//! Recursive-descent rule parser
//!
//! Grammar, read strictly left to right with no precedence between
//! `AND` and `OR`:
//!
//! ```text
//! sequence   := operand ( connective operand )*
//! operand    := comparison | "(" sequence ")"
//! comparison := field op value        op ∈ { ">", "<", "=" }
//! ```
//!
//! `a AND b OR c` therefore parses as `(a AND b) OR c`; parentheses are the
//! only way to group to the right.

use crate::error::{ParseError, Result};
use crate::tokenizer::{tokenize, Token};
use ruleweave_core::{ComparisonOp, Connective, ExpressionNode, Literal, MAX_TREE_DEPTH};

/// Rule text parser
pub struct RuleParser;

impl RuleParser {
    /// Parse rule text into an expression tree
    pub fn parse(input: &str) -> Result<ExpressionNode> {
        let tokens = tokenize(input);
        let tree = Self::parse_tokens(&tokens)?;
        log::debug!("parsed rule '{}' into {} leaves", input.trim(), tree.leaf_count());
        Ok(tree)
    }

    /// Parse an already tokenized rule
    pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<ExpressionNode> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyRule);
        }
        check_balance(tokens)?;

        let mut cursor = TokenCursor::new(tokens);
        Self::parse_sequence(&mut cursor, 0)?
            .map(|subtree| subtree.node)
            .ok_or(ParseError::EmptyRule)
    }

    /// Parse operands and connectives until `)` (when nested) or end of input
    ///
    /// `depth` is the number of enclosing groups and never exceeds
    /// [`MAX_TREE_DEPTH`], which bounds the recursion.
    fn parse_sequence(cursor: &mut TokenCursor<'_, '_>, depth: usize) -> Result<Option<Subtree>> {
        let mut running = Running::Empty;

        while let Some(token) = cursor.next() {
            match token {
                Token::LParen => {
                    if depth >= MAX_TREE_DEPTH {
                        return Err(ParseError::TooDeep {
                            max: MAX_TREE_DEPTH,
                        });
                    }
                    let open_at = cursor.position() - 1;
                    let group = Self::parse_sequence(cursor, depth + 1)?
                        .ok_or(ParseError::EmptyGroup { position: open_at })?;
                    running = running.push_operand(group, "(")?;
                }
                Token::RParen => {
                    if depth == 0 {
                        return Err(ParseError::UnbalancedParentheses {
                            position: cursor.position() - 1,
                        });
                    }
                    return running.finish();
                }
                Token::Connective(connective) => {
                    running = running.push_connective(connective)?;
                }
                Token::Word(field) => {
                    let leaf = Self::parse_comparison(field, cursor)?;
                    running = running.push_operand(Subtree::leaf(leaf), field)?;
                }
            }
        }

        if depth > 0 {
            return Err(ParseError::UnbalancedParentheses {
                position: cursor.position(),
            });
        }
        running.finish()
    }

    /// Parse `field op value`; the field token has already been consumed
    ///
    /// The operator and value are the next two tokens whatever they are, so
    /// `code = OR` compares against the string `OR`. Only parentheses are
    /// refused there, since they would break the grouping.
    fn parse_comparison(field: &str, cursor: &mut TokenCursor<'_, '_>) -> Result<ExpressionNode> {
        let incomplete = || ParseError::IncompleteComparison {
            field: field.to_string(),
        };

        let operator = cursor.next_word().ok_or_else(incomplete)?;
        let value = cursor.next_word().ok_or_else(incomplete)?;

        let operator: ComparisonOp =
            operator
                .parse()
                .map_err(|_| ParseError::UnsupportedOperator {
                    field: field.to_string(),
                    operator: operator.to_string(),
                })?;

        Ok(ExpressionNode::Comparison {
            field: field.to_string(),
            operator,
            value: Literal::from_token(value),
        })
    }
}

/// Reject `(` without `)` and `)` without `(` before building anything
fn check_balance(tokens: &[Token<'_>]) -> Result<()> {
    let mut open: Vec<usize> = Vec::new();
    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => open.push(position),
            Token::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnbalancedParentheses { position });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(position) => Err(ParseError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

/// Read position into an immutable token slice
struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Next token as text, treating `AND`/`OR` as plain words
    fn next_word(&mut self) -> Option<&'a str> {
        match self.next()? {
            Token::Word(word) => Some(word),
            Token::Connective(connective) => Some(connective.as_str()),
            Token::LParen | Token::RParen => None,
        }
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// A parsed node together with its height
struct Subtree {
    node: ExpressionNode,
    depth: usize,
}

impl Subtree {
    fn leaf(node: ExpressionNode) -> Self {
        Self { node, depth: 1 }
    }
}

/// The node under construction at one nesting level
enum Running {
    Empty,
    Complete(Subtree),
    /// A connective has been read; its right operand comes next
    Pending {
        connective: Connective,
        left: Subtree,
    },
}

impl Running {
    fn push_operand(self, operand: Subtree, found: &str) -> Result<Running> {
        match self {
            Running::Empty => Ok(Running::Complete(operand)),
            Running::Pending { connective, left } => {
                let depth = 1 + left.depth.max(operand.depth);
                if depth > MAX_TREE_DEPTH {
                    return Err(ParseError::TooDeep {
                        max: MAX_TREE_DEPTH,
                    });
                }
                Ok(Running::Complete(Subtree {
                    node: ExpressionNode::connective(connective, left.node, operand.node),
                    depth,
                }))
            }
            Running::Complete(_) => Err(ParseError::MissingConnective {
                found: found.to_string(),
            }),
        }
    }

    fn push_connective(self, connective: Connective) -> Result<Running> {
        match self {
            Running::Complete(left) => Ok(Running::Pending { connective, left }),
            Running::Empty => Err(ParseError::MissingOperand {
                connective: connective.to_string(),
                side: "left",
            }),
            // The pending connective is the one without a right operand
            Running::Pending {
                connective: pending,
                ..
            } => Err(ParseError::MissingOperand {
                connective: pending.to_string(),
                side: "right",
            }),
        }
    }

    fn finish(self) -> Result<Option<Subtree>> {
        match self {
            Running::Empty => Ok(None),
            Running::Complete(subtree) => Ok(Some(subtree)),
            Running::Pending { connective, .. } => Err(ParseError::MissingOperand {
                connective: connective.to_string(),
                side: "right",
            }),
        }
    }
}
