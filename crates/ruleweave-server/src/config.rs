//! Server configuration

use ruleweave_repository::RepositoryConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rules are stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local storage, lost on restart
    Memory,
    /// One YAML file per rule
    FileSystem {
        /// Base directory (default: "rules")
        #[serde(default = "default_storage_path")]
        path: PathBuf,
    },
    /// PostgreSQL (requires the `postgres` feature)
    Database { url: String },
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("rules")
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Memory
    }
}

impl StorageConfig {
    pub fn to_repository_config(&self) -> RepositoryConfig {
        match self {
            StorageConfig::Memory => RepositoryConfig::memory(),
            StorageConfig::FileSystem { path } => {
                RepositoryConfig::file_system(path.to_string_lossy().to_string())
            }
            StorageConfig::Database { url } => RepositoryConfig::database(url.clone()),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    pub log_format: LogFormat,

    /// Rule storage backend
    pub storage: StorageConfig,

    /// Allow cross-origin requests
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Plain,
            storage: StorageConfig::default(),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, `config/server.*` and `RULEWEAVE_*` variables
    ///
    /// Nested keys use `__`, e.g. `RULEWEAVE_STORAGE__TYPE=filesystem`.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load from an optional config file plus environment overrides
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("RULEWEAVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn default_log_filter(&self) -> String {
        let level = &self.log_level;
        format!(
            "ruleweave_server={level},ruleweave_sdk={level},ruleweave_repository={level},ruleweave_runtime={level},tower_http=debug"
        )
    }
}
