//! Builder pattern for RuleEngine

use ruleweave_repository::{RepositoryConfig, RuleRepository};
use std::sync::Arc;
use tracing::info;

use crate::engine::RuleEngine;
use crate::error::Result;

/// Builder for RuleEngine
///
/// # Example
///
/// ```rust,ignore
/// use ruleweave_sdk::{RepositoryConfig, RuleEngineBuilder};
///
/// // Rules kept as YAML files under ./rules
/// let engine = RuleEngineBuilder::new()
///     .with_repository(RepositoryConfig::file_system("rules"))
///     .build()
///     .await?;
///
/// // In-memory (default)
/// let engine = RuleEngineBuilder::new().build().await?;
/// ```
#[derive(Default)]
pub struct RuleEngineBuilder {
    repository_config: Option<RepositoryConfig>,
    repository: Option<Arc<dyn RuleRepository>>,
}

impl RuleEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the repository described by `config` at build time
    pub fn with_repository(mut self, config: RepositoryConfig) -> Self {
        self.repository_config = Some(config);
        self.repository = None;
        self
    }

    /// Use an already constructed repository
    pub fn with_repository_instance(mut self, repository: Arc<dyn RuleRepository>) -> Self {
        self.repository = Some(repository);
        self.repository_config = None;
        self
    }

    /// Build the engine
    pub async fn build(self) -> Result<RuleEngine> {
        let repository = match (self.repository, self.repository_config) {
            (Some(repository), _) => repository,
            (None, Some(config)) => {
                info!(source = ?config.source, "Opening rule repository");
                config.open().await?
            }
            (None, None) => RepositoryConfig::memory().open().await?,
        };

        Ok(RuleEngine::new(repository))
    }
}
