//! Rule text tokenizer
//!
//! Parentheses are always tokens of their own; everything else is split on
//! whitespace. There is no escaping, so a literal cannot contain whitespace
//! or parentheses.

use ruleweave_core::Connective;
use std::fmt;

/// A lexical token borrowed from the rule text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LParen,
    RParen,
    /// `AND` or `OR`
    Connective(Connective),
    /// Field name, comparison operator or literal
    Word(&'a str),
}

impl<'a> Token<'a> {
    fn word(text: &'a str) -> Self {
        match text.parse::<Connective>() {
            Ok(connective) => Token::Connective(connective),
            Err(_) => Token::Word(text),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Connective(c) => write!(f, "{}", c),
            Token::Word(w) => f.write_str(w),
        }
    }
}

/// Split rule text into tokens.
///
/// Empty or whitespace-only input yields an empty list.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for chunk in input.split_whitespace() {
        let mut rest = chunk;
        while !rest.is_empty() {
            match rest.find(|c: char| c == '(' || c == ')') {
                Some(0) => {
                    tokens.push(if rest.starts_with('(') {
                        Token::LParen
                    } else {
                        Token::RParen
                    });
                    rest = &rest[1..];
                }
                Some(pos) => {
                    tokens.push(Token::word(&rest[..pos]));
                    rest = &rest[pos..];
                }
                None => {
                    tokens.push(Token::word(rest));
                    rest = "";
                }
            }
        }
    }

    log::trace!("tokenized {} tokens", tokens.len());
    tokens
}
