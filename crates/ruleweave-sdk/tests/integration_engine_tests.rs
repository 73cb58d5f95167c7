//! End-to-end tests through RuleEngine: parse, combine, store, evaluate

use ruleweave_core::{Connective, ExpressionNode, MAX_TREE_DEPTH};
use ruleweave_repository::{FileSystemRepository, RepositoryConfig};
use ruleweave_parser::ParseError;
use ruleweave_runtime::RuntimeError;
use ruleweave_sdk::{Record, RuleEngine, RuleEngineBuilder, SdkError, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

async fn file_engine(dir: &TempDir) -> RuleEngine {
    RuleEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(
            dir.path().to_string_lossy().into_owned(),
        ))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_stored_rule_evaluates_like_parsed_rule() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let engine = file_engine(&dir).await;
    let text = "age > 30 AND department = 'Sales'";

    let stored = engine.create_rule(text, Some("sales seniors")).await?;
    let parsed = engine.parse_rule(text)?;

    let records = [
        record(&[("age", Value::from(45)), ("department", Value::from("Sales"))]),
        record(&[("age", Value::from(25)), ("department", Value::from("Sales"))]),
        record(&[("age", Value::from(45)), ("department", Value::from("HR"))]),
    ];
    for user in &records {
        assert_eq!(
            engine.evaluate_stored(&stored.id, user).await?,
            engine.evaluate_rule(&parsed, user)?
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_rules_survive_engine_restart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let stored = file_engine(&dir)
        .await
        .create_rule("salary > 50000 OR experience > 5", None)
        .await?;

    let engine = file_engine(&dir).await;
    let loaded = engine.get_rule(&stored.id).await?;
    assert_eq!(loaded.tree(), stored.tree());

    let user = record(&[("salary", Value::from(10000)), ("experience", Value::from(7))]);
    assert!(engine.evaluate_stored(&stored.id, &user).await?);
    Ok(())
}

#[tokio::test]
async fn test_combined_rule_from_original_example() -> anyhow::Result<()> {
    let engine = RuleEngineBuilder::new().build().await?;
    let combined = engine
        .create_combined_rule(
            &[
                "age > 30",
                "department = 'Sales'",
                "salary > 50000 OR experience > 5",
            ],
            Some("combined"),
        )
        .await?;

    match combined.tree() {
        ExpressionNode::Connective { connective, .. } => assert_eq!(*connective, Connective::Or),
        other => panic!("expected connective root, got {:?}", other),
    }

    let user = record(&[
        ("age", Value::from(40)),
        ("department", Value::from("Marketing")),
        ("salary", Value::from(10000)),
        ("experience", Value::from(1)),
    ]);
    assert!(engine.evaluate_stored(&combined.id, &user).await?);
    Ok(())
}

#[tokio::test]
async fn test_type_mismatch_is_an_error_not_false() -> anyhow::Result<()> {
    let engine = RuleEngineBuilder::new().build().await?;
    let stored = engine.create_rule("age > 30", None).await?;

    let err = engine
        .evaluate_stored(&stored.id, &record(&[("age", Value::from("31"))]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Evaluation(RuntimeError::TypeMismatch { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_corrupt_stored_document_is_evaluation_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repo = Arc::new(FileSystemRepository::new(dir.path())?);
    let engine = RuleEngineBuilder::new()
        .with_repository_instance(repo)
        .build()
        .await?;
    let stored = engine.create_rule("age > 30", None).await?;

    let path = dir.path().join(format!("{}.yaml", stored.id));
    let content = std::fs::read_to_string(&path)?;
    std::fs::write(&path, content.replace("schema_version: 1", "schema_version: 9"))?;

    // Bypass the read cache with a fresh engine on the same directory
    let fresh = file_engine(&dir).await;
    let err = fresh
        .evaluate_stored(&stored.id, &Record::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Evaluation(RuntimeError::InvalidDocument(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_combine_rejects_empty_and_invalid_members() -> anyhow::Result<()> {
    let engine = RuleEngineBuilder::new().build().await?;

    let empty: [&str; 0] = [];
    assert!(matches!(
        engine.combine_rules(&empty),
        Err(SdkError::InvalidRule(_))
    ));
    assert!(matches!(
        engine.create_combined_rule(&["a = 1", "   "], None).await,
        Err(SdkError::InvalidRule(_))
    ));
    assert!(engine.list_rules().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_delete_rule() -> anyhow::Result<()> {
    let engine = RuleEngineBuilder::new().build().await?;
    let stored = engine.create_rule("x = 1", None).await?;

    engine.delete_rule(&stored.id).await?;
    assert!(matches!(
        engine.get_rule(&stored.id).await,
        Err(SdkError::NotFound(_))
    ));
    assert!(matches!(
        engine.delete_rule(&stored.id).await,
        Err(SdkError::NotFound(_))
    ));
    Ok(())
}

fn chained_rule(leaves: usize) -> String {
    (0..leaves)
        .map(|i| format!("f{} = {}", i, i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[tokio::test]
async fn test_deepest_rule_reloads_after_restart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let stored = file_engine(&dir)
        .await
        .create_rule(&chained_rule(MAX_TREE_DEPTH), Some("deep"))
        .await?;
    assert_eq!(stored.tree().depth(), MAX_TREE_DEPTH);

    let engine = file_engine(&dir).await;
    let user: Record = (0..MAX_TREE_DEPTH)
        .map(|i| (format!("f{}", i), Value::from(i as i64)))
        .collect();
    assert!(engine.evaluate_stored(&stored.id, &user).await?);
    Ok(())
}

#[tokio::test]
async fn test_rule_past_depth_limit_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let engine = file_engine(&dir).await;

    let err = engine
        .create_rule(&chained_rule(MAX_TREE_DEPTH + 1), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::InvalidRule(ParseError::TooDeep { max }) if max == MAX_TREE_DEPTH
    ));

    let nested = format!("{}a = 1{}", "(".repeat(500), ")".repeat(500));
    assert!(matches!(
        engine.create_rule(&nested, None).await,
        Err(SdkError::InvalidRule(_))
    ));
    assert!(engine.list_rules().await?.is_empty());
    Ok(())
}
