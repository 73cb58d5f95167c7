//! Repository configuration types

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{FileSystemRepository, InMemoryRepository, RepositoryError, RepositoryResult, RuleRepository};

/// Repository source type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// YAML files in a directory
    FileSystem,
    /// PostgreSQL table
    Database,
}

/// Repository configuration
///
/// ```rust
/// use ruleweave_repository::RepositoryConfig;
///
/// let config = RepositoryConfig::file_system("rules");
/// let config = RepositoryConfig::database("postgresql://localhost/ruleweave");
/// let config = RepositoryConfig::memory();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub source: RepositorySource,

    /// Required for FileSystem source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Required for Database source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

impl RepositoryConfig {
    pub fn memory() -> Self {
        Self::default()
    }

    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::FileSystem,
            base_path: Some(path.into()),
            database_url: None,
        }
    }

    pub fn database(url: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::Database,
            base_path: None,
            database_url: Some(url.into()),
        }
    }

    /// Build the configured repository
    pub async fn open(&self) -> RepositoryResult<Arc<dyn RuleRepository>> {
        match self.source {
            RepositorySource::Memory => Ok(Arc::new(InMemoryRepository::new())),
            RepositorySource::FileSystem => {
                let path = self.base_path.as_deref().ok_or_else(|| {
                    RepositoryError::Config("file system source requires base_path".to_string())
                })?;
                Ok(Arc::new(FileSystemRepository::open(path).await?))
            }
            RepositorySource::Database => self.open_database().await,
        }
    }

    #[cfg(feature = "postgres")]
    async fn open_database(&self) -> RepositoryResult<Arc<dyn RuleRepository>> {
        let url = self.database_url.as_deref().ok_or_else(|| {
            RepositoryError::Config("database source requires database_url".to_string())
        })?;
        Ok(Arc::new(crate::PostgresRepository::new(url).await?))
    }

    #[cfg(not(feature = "postgres"))]
    async fn open_database(&self) -> RepositoryResult<Arc<dyn RuleRepository>> {
        Err(RepositoryError::Config(
            "database source requires the `postgres` feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(RepositoryConfig::memory().source, RepositorySource::Memory);

        let fs = RepositoryConfig::file_system("rules");
        assert_eq!(fs.source, RepositorySource::FileSystem);
        assert_eq!(fs.base_path.as_deref(), Some("rules"));

        let db = RepositoryConfig::database("postgresql://localhost/x");
        assert_eq!(db.source, RepositorySource::Database);
        assert!(db.base_path.is_none());
    }

    #[test]
    fn test_serde_lowercase_source() {
        let config: RepositoryConfig =
            serde_json::from_str(r#"{"source":"filesystem","base_path":"data"}"#).unwrap();
        assert_eq!(config.source, RepositorySource::FileSystem);
        assert_eq!(config.base_path.as_deref(), Some("data"));
    }

    #[tokio::test]
    async fn test_missing_base_path_is_config_error() {
        let config = RepositoryConfig {
            source: RepositorySource::FileSystem,
            ..Default::default()
        };
        let err = config.open().await.err().unwrap();
        assert!(matches!(err, RepositoryError::Config(_)));
    }

    #[cfg(not(feature = "postgres"))]
    #[tokio::test]
    async fn test_database_without_feature() {
        let err = RepositoryConfig::database("postgresql://localhost/x")
            .open()
            .await
            .err()
            .unwrap();
        assert!(matches!(err, RepositoryError::Config(_)));
    }
}
