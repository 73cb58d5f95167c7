//! Rule record storage for the Ruleweave rule engine
//!
//! Parsed expression trees are persisted as versioned documents and can be
//! loaded back by identifier for later evaluation.
//!
//! # Backends
//!
//! - [`InMemoryRepository`]: process-local, for tests and ephemeral servers
//! - [`FileSystemRepository`]: one YAML file per rule, with a TTL read cache
//! - `PostgresRepository`: JSONB rows (requires the `postgres` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use ruleweave_core::{ComparisonOp, ExpressionNode};
//! use ruleweave_repository::{RepositoryConfig, RuleRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = RepositoryConfig::file_system("rules").open().await?;
//!
//!     let tree = ExpressionNode::comparison("department", ComparisonOp::Eq, "Marketing");
//!     let record = repo.store("marketing", tree).await?;
//!     println!("Stored rule {}", record.id);
//!
//!     Ok(())
//! }
//! ```

mod cache;
pub mod config;
pub mod error;
pub mod file_system;
pub mod memory;
pub mod models;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use config::{RepositoryConfig, RepositorySource};
pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemRepository;
pub use memory::InMemoryRepository;
pub use models::{CacheConfig, CacheStats, RuleRecord};
pub use traits::{CacheableRepository, RuleRepository};

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
