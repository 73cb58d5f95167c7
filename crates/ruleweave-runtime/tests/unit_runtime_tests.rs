//! Unit tests for rule evaluation
//!
//! Parses rule text and evaluates it against records built from JSON.

use ruleweave_core::{Record, RuleDocument};
use ruleweave_parser::{RuleCombiner, RuleParser};
use ruleweave_runtime::{Evaluator, RuntimeError};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).expect("record JSON")
}

fn eval(rule: &str, data: serde_json::Value) -> Result<bool, RuntimeError> {
    let tree = RuleParser::parse(rule).expect("rule should parse");
    Evaluator::evaluate(&tree, &record(data))
}

// =============================================================================
// Single comparisons
// =============================================================================

#[test]
fn test_comparison_satisfied_and_violated() {
    let cases = [
        ("age > 30", json!({"age": 31}), json!({"age": 29})),
        ("age < 30", json!({"age": 12}), json!({"age": 30})),
        ("department = 'Sales'", json!({"department": "Sales"}), json!({"department": "HR"})),
        ("salary = 50000", json!({"salary": 50000}), json!({"salary": 50001})),
    ];

    for (rule, satisfying, violating) in cases {
        assert_eq!(eval(rule, satisfying), Ok(true), "rule: {}", rule);
        assert_eq!(eval(rule, violating), Ok(false), "rule: {}", rule);
    }
}

#[test]
fn test_strict_greater_than() {
    assert_eq!(eval("age > 30", json!({"age": 30})), Ok(false));
}

#[test]
fn test_numeric_string_in_record_with_ordering_is_type_mismatch() {
    let err = eval("age > 30", json!({"age": "31"})).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { ref field, .. } if field == "age"));
    assert_eq!(
        err.to_string(),
        "Type mismatch: cannot evaluate age (string) > number"
    );
}

#[test]
fn test_numeric_string_in_record_with_equality() {
    assert_eq!(eval("age = 31", json!({"age": "31"})), Ok(true));
    assert_eq!(eval("age = 31", json!({"age": "thirty-one"})), Ok(false));
}

#[test]
fn test_missing_field_is_false_for_every_operator() {
    for rule in ["age > 30", "age < 30", "age = 30", "name = 'x'"] {
        assert_eq!(eval(rule, json!({})), Ok(false), "rule: {}", rule);
        assert_eq!(eval(rule, json!({"age": null, "name": null})), Ok(false), "rule: {}", rule);
    }
}

// =============================================================================
// Connectives
// =============================================================================

#[test]
fn test_original_sample_rule() {
    let rule = "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)";

    assert_eq!(
        eval(rule, json!({"age": 35, "department": "Sales", "salary": 60000, "experience": 3})),
        Ok(true)
    );
    assert_eq!(
        eval(rule, json!({"age": 22, "department": "Marketing", "salary": 20000, "experience": 6})),
        Ok(true)
    );
    assert_eq!(
        eval(rule, json!({"age": 28, "department": "Sales", "salary": 90000, "experience": 9})),
        Ok(false)
    );
}

#[test]
fn test_left_to_right_without_precedence() {
    // (a = 1 OR b = 1) AND c = 1, not a = 1 OR (b = 1 AND c = 1)
    assert_eq!(
        eval("a = 1 OR b = 1 AND c = 1", json!({"a": 1, "b": 0, "c": 0})),
        Ok(false)
    );
}

// =============================================================================
// Combination and persistence
// =============================================================================

#[test]
fn test_combined_rules_use_dominant_or() {
    let combined = RuleCombiner::combine(&[
        "age > 30",
        "department = 'Sales'",
        "salary > 50000 OR experience > 5",
    ])
    .unwrap();

    let data = record(json!({"age": 40, "department": "Marketing", "salary": 10000, "experience": 1}));
    assert_eq!(Evaluator::evaluate(&combined, &data), Ok(true));

    let data = record(json!({"age": 20, "department": "Marketing", "salary": 10000, "experience": 1}));
    assert_eq!(Evaluator::evaluate(&combined, &data), Ok(false));
}

#[test]
fn test_single_rule_combination_evaluates_like_the_rule() {
    let rule = "age > 30 AND department = 'Sales'";
    let parsed = RuleParser::parse(rule).unwrap();
    let combined = RuleCombiner::combine(&[rule]).unwrap();

    for data in [
        json!({"age": 31, "department": "Sales"}),
        json!({"age": 31, "department": "HR"}),
        json!({"age": 18}),
    ] {
        let data = record(data);
        assert_eq!(
            Evaluator::evaluate(&combined, &data),
            Evaluator::evaluate(&parsed, &data)
        );
    }
}

#[test]
fn test_document_round_trip_evaluates_identically() -> anyhow::Result<()> {
    let rule = "(age > 30 OR department = 'Sales') AND salary > 50000";
    let tree = RuleParser::parse(rule)?;
    let stored = RuleDocument::new(tree.clone()).to_json()?;
    let loaded = RuleDocument::from_json(&stored)?.into_tree();

    for data in [
        json!({"age": 31, "salary": 60000}),
        json!({"department": "Sales", "salary": 40000}),
        json!({"age": 20, "department": "HR", "salary": 90000}),
    ] {
        let data = record(data);
        assert_eq!(Evaluator::evaluate(&loaded, &data), Evaluator::evaluate(&tree, &data));
    }
    Ok(())
}
