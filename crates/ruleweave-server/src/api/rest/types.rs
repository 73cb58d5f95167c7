//! REST API type definitions

use chrono::{DateTime, Utc};
use ruleweave_core::RuleDocument;
use ruleweave_repository::RuleRecord;
use ruleweave_sdk::RuleEngine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleEngine>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `POST /api/rules/create_rule`
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    pub rule_string: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /api/rules/combine_rules`
#[derive(Debug, Deserialize)]
pub struct CombineRulesRequest {
    pub rule_strings: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /api/rules/evaluate_rule`
///
/// Accepts both `ruleId`/`userData` and `rule_id`/`user_data`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRuleRequest {
    #[serde(alias = "ruleId")]
    pub rule_id: String,
    #[serde(alias = "userData", default)]
    pub user_data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRuleResponse {
    pub result: bool,
}

/// A stored rule as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleResponse {
    pub id: String,
    pub name: String,
    /// Tree rendered back to rule text
    pub rule: String,
    #[serde(flatten)]
    pub document: RuleDocument,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RuleRecord> for RuleResponse {
    fn from(record: RuleRecord) -> Self {
        Self {
            rule: record.tree().to_string(),
            id: record.id,
            name: record.name,
            document: record.document,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RuleListResponse {
    pub rules: Vec<RuleResponse>,
    pub count: usize,
}
