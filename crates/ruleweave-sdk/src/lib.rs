//! Ruleweave SDK
//!
//! High-level API over the parser, evaluator and rule repository.
//!
//! ```rust,ignore
//! use ruleweave_sdk::{Record, RuleEngineBuilder, Value};
//!
//! let engine = RuleEngineBuilder::new().build().await?;
//! let stored = engine.create_rule("age > 30 AND department = 'Sales'", None).await?;
//!
//! let mut user = Record::new();
//! user.insert("age".to_string(), Value::from(42));
//! user.insert("department".to_string(), Value::from("Sales"));
//! assert!(engine.evaluate_stored(&stored.id, &user).await?);
//! ```

pub mod builder;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use engine::{RuleEngine, DEFAULT_COMBINED_NAME, DEFAULT_RULE_NAME};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use ruleweave_core::{ExpressionNode, Record, RuleDocument, Value};
pub use ruleweave_repository::{RepositoryConfig, RepositorySource, RuleRecord, RuleRepository};
