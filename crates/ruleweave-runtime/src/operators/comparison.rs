//! Comparison operator execution
//!
//! | record value        | literal | `>` / `<`        | `=`                              |
//! |---------------------|---------|------------------|----------------------------------|
//! | missing or null     | any     | false            | false                            |
//! | number              | number  | numeric          | numeric                          |
//! | string              | string  | lexicographic    | exact                            |
//! | string / number     | other   | type mismatch    | numeric if the string is a number, else false |
//! | bool                | string  | type mismatch    | matches `'true'` / `'false'`     |
//! | anything else       |         | type mismatch    | type mismatch                    |

use crate::error::{Result, RuntimeError};
use ruleweave_core::{ComparisonOp, Literal, Value};
use std::cmp::Ordering;

/// Execute one comparison leaf
pub(crate) fn execute_compare(
    field: &str,
    actual: Option<&Value>,
    op: ComparisonOp,
    expected: &Literal,
) -> Result<bool> {
    let actual = match actual {
        None | Some(Value::Null) => {
            tracing::trace!("field '{}' missing or null, {} comparison is false", field, op);
            return Ok(false);
        }
        Some(value) => value,
    };

    match (actual, expected) {
        (Value::Number(l), Literal::Number(r)) => Ok(holds(op, l.partial_cmp(r))),
        (Value::String(l), Literal::String(r)) => Ok(holds(op, Some(l.as_str().cmp(r.as_str())))),

        (Value::String(s), Literal::Number(n)) | (Value::Number(n), Literal::String(s))
            if op == ComparisonOp::Eq =>
        {
            Ok(parse_number(s).is_some_and(|parsed| parsed == *n))
        }

        (Value::Bool(b), Literal::String(s)) if op == ComparisonOp::Eq => {
            Ok(s.as_str() == if *b { "true" } else { "false" })
        }

        _ => Err(RuntimeError::TypeMismatch {
            field: field.to_string(),
            operator: op.to_string(),
            actual: actual.type_name(),
            expected: expected.type_name(),
        }),
    }
}

fn holds(op: ComparisonOp, ordering: Option<Ordering>) -> bool {
    let wanted = match op {
        ComparisonOp::Gt => Ordering::Greater,
        ComparisonOp::Lt => Ordering::Less,
        ComparisonOp::Eq => Ordering::Equal,
    };
    ordering == Some(wanted)
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
