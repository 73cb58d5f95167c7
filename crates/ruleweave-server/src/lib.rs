//! Ruleweave HTTP rule service library
//!
//! Provides REST API components for testing and reuse.

pub mod api;
pub mod config;
pub mod error;

use crate::config::ServerConfig;
use ruleweave_sdk::{RuleEngine, RuleEngineBuilder};

/// Build the rule engine for the configured storage backend
pub async fn init_engine(config: &ServerConfig) -> anyhow::Result<RuleEngine> {
    let engine = RuleEngineBuilder::new()
        .with_repository(config.storage.to_repository_config())
        .build()
        .await?;
    Ok(engine)
}
