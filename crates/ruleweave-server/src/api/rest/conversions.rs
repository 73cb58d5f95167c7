//! Conversion from request JSON to engine values

use ruleweave_core::{Record, Value};
use std::collections::HashMap;

/// Convert serde_json::Value to ruleweave_core::Value
pub(super) fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::Null,
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect(),
        ),
    }
}

/// Build an evaluation record from submitted user data
pub(super) fn record_from_json(data: HashMap<String, serde_json::Value>) -> Record {
    data.into_iter()
        .map(|(k, v)| (k, json_to_value(v)))
        .collect()
}
