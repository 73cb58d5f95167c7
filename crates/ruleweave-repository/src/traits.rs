//! Core trait definitions for the repository pattern
//!
//! - [`RuleRepository`]: store, load, list and delete rule records
//! - [`CacheableRepository`]: cache inspection for backends that cache reads
//!
//! # Example
//!
//! ```no_run
//! use ruleweave_core::{ComparisonOp, ExpressionNode};
//! use ruleweave_repository::{InMemoryRepository, RuleRepository};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let repo = InMemoryRepository::new();
//! let tree = ExpressionNode::comparison("age", ComparisonOp::Gt, 30.0);
//!
//! let record = repo.store("adults", tree).await?;
//! let loaded = repo.load_by_id(&record.id).await?;
//! assert_eq!(loaded.tree(), record.tree());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use ruleweave_core::ExpressionNode;

use crate::{CacheStats, RepositoryResult, RuleRecord};

/// Storage for named rule trees
///
/// Trees are stored exactly as given and load back structurally equal.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Persist a tree under a fresh identifier
    ///
    /// Trees deeper than [`MAX_TREE_DEPTH`](ruleweave_core::MAX_TREE_DEPTH)
    /// are refused with [`RepositoryError::Document`](crate::RepositoryError::Document)
    /// since they could not be loaded back.
    async fn store(&self, name: &str, tree: ExpressionNode) -> RepositoryResult<RuleRecord>;

    /// Load a record by identifier
    ///
    /// Returns [`RepositoryError::NotFound`](crate::RepositoryError::NotFound)
    /// for unknown identifiers.
    async fn load_by_id(&self, id: &str) -> RepositoryResult<RuleRecord>;

    /// All stored records, oldest first
    async fn list(&self) -> RepositoryResult<Vec<RuleRecord>>;

    /// Remove a record
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// Check if a record exists
    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        match self.load_by_id(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Extension trait for repositories with caching support
#[async_trait]
pub trait CacheableRepository: RuleRepository {
    /// Get cache statistics
    async fn cache_stats(&self) -> CacheStats;

    /// Clear all cached entries and reset counters
    async fn clear_cache(&self);
}

pub(crate) fn sort_oldest_first(records: &mut [RuleRecord]) {
    records.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
