//! Unit tests for expression tree types
//!
//! Tests the tree and document structures shared by every Ruleweave crate

use ruleweave_core::*;

// =============================================================================
// Tree construction
// =============================================================================

fn sample_tree() -> ExpressionNode {
    // (age > 30 AND department = 'Sales') OR (salary > 50000 OR experience > 5)
    ExpressionNode::or(
        ExpressionNode::and(
            ExpressionNode::comparison("age", ComparisonOp::Gt, 30.0),
            ExpressionNode::comparison("department", ComparisonOp::Eq, "Sales"),
        ),
        ExpressionNode::or(
            ExpressionNode::comparison("salary", ComparisonOp::Gt, 50000.0),
            ExpressionNode::comparison("experience", ComparisonOp::Gt, 5.0),
        ),
    )
}

#[test]
fn test_connective_children_are_owned() {
    let tree = sample_tree();
    match &tree {
        ExpressionNode::Connective {
            connective,
            left,
            right,
        } => {
            assert_eq!(*connective, Connective::Or);
            assert!(matches!(**left, ExpressionNode::Connective { connective: Connective::And, .. }));
            assert!(matches!(**right, ExpressionNode::Connective { connective: Connective::Or, .. }));
        }
        _ => panic!("Expected Connective root"),
    }
}

#[test]
fn test_connective_counts() {
    let tree = sample_tree();
    assert_eq!(tree.connective_count(Connective::And), 1);
    assert_eq!(tree.connective_count(Connective::Or), 2);
    assert_eq!(tree.leaf_count(), 4);
}

#[test]
fn test_clone_is_independent() {
    let tree = sample_tree();
    let cloned = tree.clone();
    assert_eq!(tree, cloned);
}

// =============================================================================
// Document format
// =============================================================================

#[test]
fn test_document_json_round_trip() -> anyhow::Result<()> {
    let doc = RuleDocument::new(sample_tree());
    let back = RuleDocument::from_json(&doc.to_json_pretty()?)?;
    assert_eq!(back, doc);
    Ok(())
}

#[test]
fn test_document_value_round_trip() -> anyhow::Result<()> {
    let doc = RuleDocument::from(sample_tree());
    let value = doc.to_value()?;

    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["tree"]["type"], "connective");

    let back = RuleDocument::from_value(value)?;
    assert_eq!(back.tree, sample_tree());
    Ok(())
}

#[test]
fn test_document_yaml_round_trip() -> anyhow::Result<()> {
    // A string literal that looks like a number must stay a string
    let tree = ExpressionNode::and(
        ExpressionNode::comparison("code", ComparisonOp::Eq, "30"),
        ExpressionNode::comparison("age", ComparisonOp::Gt, 30.0),
    );
    let doc = RuleDocument::new(tree.clone());

    let yaml = serde_yaml::to_string(&doc)?;
    let back: RuleDocument = serde_yaml::from_str(&yaml)?;

    assert_eq!(back.tree, tree);
    Ok(())
}

#[test]
fn test_document_decode_error_names_operator() {
    let json = r#"{
        "schema_version": 1,
        "tree": { "type": "comparison", "field": "age", "operator": "!=", "value": 1 }
    }"#;

    let err = RuleDocument::from_json(json).unwrap_err();
    assert!(err.to_string().contains("Unknown comparison operator: !="));
}

#[test]
fn test_document_unknown_node_type() {
    let json = r#"{
        "schema_version": 1,
        "tree": { "type": "negation", "child": null }
    }"#;

    assert!(matches!(
        RuleDocument::from_json(json),
        Err(CoreError::InvalidDocument(_))
    ));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_of_sample_tree() {
    assert_eq!(
        sample_tree().to_string(),
        "(age > 30 AND department = 'Sales') OR (salary > 50000 OR experience > 5)"
    );
}
