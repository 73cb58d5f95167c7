//! PostgreSQL database repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ruleweave_core::{ExpressionNode, RuleDocument};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use tracing::debug;

use crate::cache::RecordCache;
use crate::traits::{CacheableRepository, RuleRepository};
use crate::{CacheConfig, CacheStats, RepositoryError, RepositoryResult, RuleRecord};

const CREATE_RULES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rules (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    document JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

/// PostgreSQL database repository
///
/// Rule documents are stored as JSONB in the `rules` table.
pub struct PostgresRepository {
    pool: PgPool,
    cache: RecordCache,
}

impl PostgresRepository {
    /// Connect and make sure the `rules` table exists
    ///
    /// # Example
    /// ```no_run
    /// use ruleweave_repository::PostgresRepository;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let repo = PostgresRepository::new("postgresql://localhost/ruleweave").await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(database_url: &str) -> RepositoryResult<Self> {
        let pool = PgPool::connect(database_url).await?;
        Self::with_pool(pool, CacheConfig::default()).await
    }

    /// Use an existing connection pool
    pub async fn with_pool(pool: PgPool, cache_config: CacheConfig) -> RepositoryResult<Self> {
        let repo = Self {
            pool,
            cache: RecordCache::new(cache_config),
        };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_RULES_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    fn record_from_row(row: &PgRow) -> RepositoryResult<RuleRecord> {
        let document: serde_json::Value = row.try_get("document")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(RuleRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            document: RuleDocument::from_value(document)?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl RuleRepository for PostgresRepository {
    async fn store(&self, name: &str, tree: ExpressionNode) -> RepositoryResult<RuleRecord> {
        let record = RuleRecord::new(name, tree);
        record.document.validate()?;
        let document = record.document.to_value()?;

        sqlx::query(
            r#"
            INSERT INTO rules (id, name, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&document)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        debug!(id = %record.id, "Inserted rule row");
        self.cache.put(record.clone()).await;
        Ok(record)
    }

    async fn load_by_id(&self, id: &str) -> RepositoryResult<RuleRecord> {
        if let Some(record) = self.cache.get(id).await {
            return Ok(record);
        }

        let row = sqlx::query(
            r#"
            SELECT id, name, document, created_at, updated_at
            FROM rules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found(id))?;

        let record = Self::record_from_row(&row)?;
        self.cache.put(record.clone()).await;
        Ok(record)
    }

    async fn list(&self) -> RepositoryResult<Vec<RuleRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, document, created_at, updated_at
            FROM rules
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.cache.remove(id).await;

        let result = sqlx::query("DELETE FROM rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let exists: bool = sqlx::query("SELECT EXISTS(SELECT 1 FROM rules WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?
            .try_get(0)?;
        Ok(exists)
    }
}

#[async_trait]
impl CacheableRepository for PostgresRepository {
    async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
