//! TTL read cache shared by the persistent backends

use crate::models::{CacheConfig, CacheCounters, CacheStats, CachedRecord, RuleRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub(crate) struct RecordCache {
    entries: RwLock<HashMap<String, CachedRecord>>,
    config: CacheConfig,
    counters: CacheCounters,
}

impl RecordCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            counters: CacheCounters::default(),
        }
    }

    pub async fn get(&self, id: &str) -> Option<RuleRecord> {
        if !self.config.enabled {
            return None;
        }

        let entries = self.entries.read().await;
        match entries.get(id) {
            Some(cached) if !cached.is_expired() => {
                self.counters.hit();
                Some(cached.record.clone())
            }
            _ => {
                self.counters.miss();
                None
            }
        }
    }

    pub async fn put(&self, record: RuleRecord) {
        if !self.config.enabled {
            return;
        }

        let mut entries = self.entries.write().await;
        if let Some(max) = self.config.max_entries {
            if entries.len() >= max && !entries.contains_key(&record.id) {
                entries.retain(|_, cached| !cached.is_expired());
                if entries.len() >= max {
                    let oldest = entries
                        .iter()
                        .min_by_key(|(_, cached)| cached.cached_at)
                        .map(|(id, _)| id.clone());
                    if let Some(oldest) = oldest {
                        entries.remove(&oldest);
                    }
                }
            }
        }
        entries.insert(
            record.id.clone(),
            CachedRecord::new(record, self.config.default_ttl),
        );
    }

    pub async fn remove(&self, id: &str) {
        self.entries.write().await.remove(id);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.counters.reset();
    }

    pub async fn stats(&self) -> CacheStats {
        let size = self.entries.read().await.len();
        self.counters.snapshot(size)
    }
}
