//! Operators for Ruleweave expressions

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators allowed in a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ComparisonOp {
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Equal (=)
    #[serde(rename = "=")]
    Eq,
}

impl ComparisonOp {
    /// Source spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Gt => ">",
            ComparisonOp::Lt => "<",
            ComparisonOp::Eq => "=",
        }
    }
}

impl FromStr for ComparisonOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(ComparisonOp::Gt),
            "<" => Ok(ComparisonOp::Lt),
            "=" => Ok(ComparisonOp::Eq),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for ComparisonOp {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical connective joining two sub-expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Connective {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl Connective {
    /// Keyword spelling of the connective
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

impl FromStr for Connective {
    type Err = CoreError;

    /// Keywords are case-sensitive: `and` is not a connective.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Connective::And),
            "OR" => Ok(Connective::Or),
            other => Err(CoreError::UnknownConnective(other.to_string())),
        }
    }
}

impl TryFrom<String> for Connective {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_op_from_str() {
        assert_eq!(">".parse::<ComparisonOp>().unwrap(), ComparisonOp::Gt);
        assert_eq!("<".parse::<ComparisonOp>().unwrap(), ComparisonOp::Lt);
        assert_eq!("=".parse::<ComparisonOp>().unwrap(), ComparisonOp::Eq);
        assert!(matches!(
            ">=".parse::<ComparisonOp>(),
            Err(CoreError::UnknownOperator(op)) if op == ">="
        ));
    }

    #[test]
    fn test_connective_is_case_sensitive() {
        assert_eq!("AND".parse::<Connective>().unwrap(), Connective::And);
        assert_eq!("OR".parse::<Connective>().unwrap(), Connective::Or);
        assert!("and".parse::<Connective>().is_err());
        assert!("XOR".parse::<Connective>().is_err());
    }

    #[test]
    fn test_operator_serde_spelling() {
        assert_eq!(serde_json::to_string(&ComparisonOp::Gt).unwrap(), "\">\"");
        assert_eq!(serde_json::to_string(&Connective::Or).unwrap(), "\"OR\"");
        let op: ComparisonOp = serde_json::from_str("\"=\"").unwrap();
        assert_eq!(op, ComparisonOp::Eq);

        let err = serde_json::from_str::<ComparisonOp>("\"!=\"").unwrap_err();
        assert!(err.to_string().contains("Unknown comparison operator: !="));
    }

    #[test]
    fn test_unknown_connective_fails_to_decode() {
        let err = serde_json::from_str::<Connective>("\"XOR\"").unwrap_err();
        assert!(err.to_string().contains("Unknown connective: XOR"));
    }
}
