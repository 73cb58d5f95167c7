//! Literal values on the right-hand side of a comparison

use serde::{Deserialize, Serialize};
use std::fmt;

/// A comparison literal, typed once at parse time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    /// Type a raw literal token.
    ///
    /// Tokens that parse as a finite number become `Number`. Everything else
    /// is a `String` with one leading and one trailing quote (`'` or `"`)
    /// removed when present.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => Literal::Number(n),
            _ => Literal::String(strip_quotes(token).to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
        }
    }
}

fn strip_quotes(token: &str) -> &str {
    let token = token
        .strip_prefix('\'')
        .or_else(|| token.strip_prefix('"'))
        .unwrap_or(token);
    token
        .strip_suffix('\'')
        .or_else(|| token.strip_suffix('"'))
        .unwrap_or(token)
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}
