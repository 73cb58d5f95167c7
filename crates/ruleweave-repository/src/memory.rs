//! In-memory repository, used for tests and ephemeral servers

use async_trait::async_trait;
use ruleweave_core::ExpressionNode;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::traits::{sort_oldest_first, RuleRepository};
use crate::{RepositoryError, RepositoryResult, RuleRecord};

/// Repository holding records in a process-local map
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<HashMap<String, RuleRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RuleRepository for InMemoryRepository {
    async fn store(&self, name: &str, tree: ExpressionNode) -> RepositoryResult<RuleRecord> {
        let record = RuleRecord::new(name, tree);
        record.document.validate()?;
        debug!(id = %record.id, name = %record.name, "Storing rule in memory");
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn load_by_id(&self, id: &str) -> RepositoryResult<RuleRecord> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<RuleRecord>> {
        let mut records: Vec<RuleRecord> = self.records.read().await.values().cloned().collect();
        sort_oldest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.records.read().await.contains_key(id))
    }
}
