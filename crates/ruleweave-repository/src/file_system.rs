//! File system based repository implementation
//!
//! Each record lives in `<root>/<id>.yaml`. Writes go to a temporary file
//! first and are renamed into place.

use async_trait::async_trait;
use path_absolutize::Absolutize;
use ruleweave_core::ExpressionNode;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::RecordCache;
use crate::traits::{sort_oldest_first, CacheableRepository, RuleRepository};
use crate::{CacheConfig, CacheStats, RepositoryError, RepositoryResult, RuleRecord};

const RECORD_EXTENSION: &str = "yaml";
const TEMP_EXTENSION: &str = "tmp";

/// File system based repository
///
/// Reads are served through a TTL cache.
pub struct FileSystemRepository {
    /// Root directory of the repository
    root_path: PathBuf,
    cache: RecordCache,
}

impl FileSystemRepository {
    /// Open an existing repository directory
    ///
    /// # Example
    /// ```no_run
    /// use ruleweave_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("rules").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        Self::with_cache_config(root_path, CacheConfig::default())
    }

    /// Open an existing repository directory with custom cache configuration
    pub fn with_cache_config<P: AsRef<Path>>(
        root_path: P,
        config: CacheConfig,
    ) -> RepositoryResult<Self> {
        let path = root_path.as_ref();

        if !path.is_dir() {
            return Err(RepositoryError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        Ok(Self {
            root_path: abs_path,
            cache: RecordCache::new(config),
        })
    }

    /// Create the directory if needed, then open it
    pub async fn open<P: AsRef<Path>>(root_path: P) -> RepositoryResult<Self> {
        fs::create_dir_all(root_path.as_ref()).await?;
        Self::new(root_path)
    }

    /// Get the root path of the repository
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Path of the record file for `id`
    ///
    /// Only canonical UUIDs map to a path, so an identifier can never
    /// escape the root directory.
    fn record_path(&self, id: &str) -> Option<PathBuf> {
        let parsed = Uuid::parse_str(id).ok()?;
        if parsed.to_string() != id {
            return None;
        }
        Some(self.root_path.join(format!("{}.{}", id, RECORD_EXTENSION)))
    }

    async fn read_record(&self, path: &Path) -> RepositoryResult<RuleRecord> {
        let content = fs::read_to_string(path).await?;
        let record: RuleRecord = serde_yaml::from_str(&content)?;
        record.document.validate()?;
        Ok(record)
    }

    async fn write_record(&self, path: &Path, record: &RuleRecord) -> RepositoryResult<()> {
        let content = serde_yaml::to_string(record)?;
        let temp_path = path.with_extension(TEMP_EXTENSION);

        fs::write(&temp_path, content).await?;
        if let Err(e) = fs::rename(&temp_path, path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl RuleRepository for FileSystemRepository {
    async fn store(&self, name: &str, tree: ExpressionNode) -> RepositoryResult<RuleRecord> {
        let record = RuleRecord::new(name, tree);
        record.document.validate()?;
        let path = self
            .record_path(&record.id)
            .ok_or_else(|| RepositoryError::Other(format!("Invalid record id: {}", record.id)))?;

        debug!(id = %record.id, path = %path.display(), "Writing rule file");
        self.write_record(&path, &record).await?;
        self.cache.put(record.clone()).await;
        Ok(record)
    }

    async fn load_by_id(&self, id: &str) -> RepositoryResult<RuleRecord> {
        if let Some(record) = self.cache.get(id).await {
            return Ok(record);
        }

        let path = self
            .record_path(id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        let record = match self.read_record(&path).await {
            Ok(record) => record,
            Err(RepositoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::not_found(id));
            }
            Err(e) => return Err(e),
        };

        self.cache.put(record.clone()).await;
        Ok(record)
    }

    async fn list(&self) -> RepositoryResult<Vec<RuleRecord>> {
        let mut entries = fs::read_dir(&self.root_path).await?;
        let mut records = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            match self.read_record(&path).await {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable rule file"),
            }
        }

        sort_oldest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let path = self
            .record_path(id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        self.cache.remove(id).await;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(id, "Deleted rule file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::not_found(id))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CacheableRepository for FileSystemRepository {
    async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
