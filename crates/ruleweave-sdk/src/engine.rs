//! High-level rule engine

use ruleweave_core::{ExpressionNode, Record};
use ruleweave_parser::{RuleCombiner, RuleParser};
use ruleweave_repository::{RepositoryError, RuleRecord, RuleRepository};
use ruleweave_runtime::{Evaluator, RuntimeError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Result, SdkError};

/// Name given to created rules when the caller supplies none
pub const DEFAULT_RULE_NAME: &str = "Untitled rule";
/// Name given to combined rules when the caller supplies none
pub const DEFAULT_COMBINED_NAME: &str = "Combined rule";

/// Parses, combines, stores and evaluates rules
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct RuleEngine {
    repository: Arc<dyn RuleRepository>,
}

impl RuleEngine {
    pub fn new(repository: Arc<dyn RuleRepository>) -> Self {
        Self { repository }
    }

    /// Parse rule text into a tree
    pub fn parse_rule(&self, text: &str) -> Result<ExpressionNode> {
        RuleParser::parse(text).map_err(|e| {
            warn!(error = %e, "Rejected rule text");
            e.into()
        })
    }

    /// Evaluate a tree against a record
    pub fn evaluate_rule(&self, tree: &ExpressionNode, record: &Record) -> Result<bool> {
        let result = Evaluator::evaluate(tree, record)?;
        debug!(rule = %tree, result, "Evaluated rule");
        Ok(result)
    }

    /// Parse each text and merge them under the dominant connective
    pub fn combine_rules<S: AsRef<str>>(&self, texts: &[S]) -> Result<ExpressionNode> {
        Ok(RuleCombiner::combine(texts)?)
    }

    /// Parse and store a rule
    ///
    /// Nothing is stored when the text is invalid.
    pub async fn create_rule(&self, text: &str, name: Option<&str>) -> Result<RuleRecord> {
        let tree = self.parse_rule(text)?;
        let record = self
            .repository
            .store(name.unwrap_or(DEFAULT_RULE_NAME), tree)
            .await?;
        info!(id = %record.id, name = %record.name, "Created rule");
        Ok(record)
    }

    /// Combine and store several rules as one
    pub async fn create_combined_rule<S: AsRef<str>>(
        &self,
        texts: &[S],
        name: Option<&str>,
    ) -> Result<RuleRecord> {
        let tree = self.combine_rules(texts)?;
        let record = self
            .repository
            .store(name.unwrap_or(DEFAULT_COMBINED_NAME), tree)
            .await?;
        info!(
            id = %record.id,
            rules = texts.len(),
            "Created combined rule"
        );
        Ok(record)
    }

    /// Load a stored rule and evaluate it
    ///
    /// A stored tree that no longer decodes is reported as an evaluation
    /// error, not a storage failure.
    pub async fn evaluate_stored(&self, id: &str, record: &Record) -> Result<bool> {
        let stored = self.repository.load_by_id(id).await.map_err(|e| match e {
            RepositoryError::Document(core) => SdkError::Evaluation(RuntimeError::from(core)),
            RepositoryError::YamlParse(yaml) => {
                SdkError::Evaluation(RuntimeError::InvalidDocument(yaml.to_string()))
            }
            other => other.into(),
        })?;
        self.evaluate_rule(stored.tree(), record)
    }

    pub async fn get_rule(&self, id: &str) -> Result<RuleRecord> {
        Ok(self.repository.load_by_id(id).await?)
    }

    pub async fn list_rules(&self) -> Result<Vec<RuleRecord>> {
        Ok(self.repository.list().await?)
    }

    pub async fn delete_rule(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await?;
        info!(id, "Deleted rule");
        Ok(())
    }
}
