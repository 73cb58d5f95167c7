//! Unit tests for InMemoryRepository and repository configuration

use ruleweave_core::{ComparisonOp, ExpressionNode};
use ruleweave_repository::{InMemoryRepository, RepositoryConfig, RuleRepository};
use std::sync::Arc;
use tempfile::TempDir;

fn tree(field: &str) -> ExpressionNode {
    ExpressionNode::comparison(field, ComparisonOp::Lt, 5.0)
}

#[tokio::test]
async fn test_round_trip_preserves_tree() {
    let repo = InMemoryRepository::new();
    let record = repo.store("limit", tree("count")).await.unwrap();

    let loaded = repo.load_by_id(&record.id).await.unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.tree(), &tree("count"));
}

#[tokio::test]
async fn test_ids_are_unique() {
    let repo = InMemoryRepository::new();
    let a = repo.store("same", tree("x")).await.unwrap();
    let b = repo.store("same", tree("x")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_stores() -> anyhow::Result<()> {
    let repo = Arc::new(InMemoryRepository::new());
    let mut handles = Vec::new();

    for i in 0..16 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.store(&format!("rule-{}", i), tree("n")).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(repo.len().await, 16);
    Ok(())
}

#[tokio::test]
async fn test_config_opens_each_local_backend() -> anyhow::Result<()> {
    let memory = RepositoryConfig::memory().open().await?;
    let record = memory.store("m", tree("a")).await?;
    assert!(memory.exists(&record.id).await?);

    let dir = TempDir::new()?;
    let path = dir.path().join("store");
    let fs_repo = RepositoryConfig::file_system(path.to_string_lossy())
        .open()
        .await?;
    let record = fs_repo.store("f", tree("b")).await?;
    assert_eq!(fs_repo.load_by_id(&record.id).await?.tree(), &tree("b"));
    assert!(path.join(format!("{}.yaml", record.id)).exists());
    Ok(())
}
