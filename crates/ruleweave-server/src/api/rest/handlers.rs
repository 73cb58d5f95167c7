//! API endpoint handlers

use super::conversions::record_from_json;
use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

/// Greeting at the service root
pub(super) async fn root() -> &'static str {
    "Ruleweave rule service"
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Parse and store one rule
pub(super) async fn create_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateRuleRequest>,
) -> Result<(StatusCode, Json<RuleResponse>), ServerError> {
    let record = state
        .engine
        .create_rule(&payload.rule_string, payload.name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Combine several rules and store the result
pub(super) async fn combine_rules(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CombineRulesRequest>,
) -> Result<(StatusCode, Json<RuleResponse>), ServerError> {
    info!(rules = payload.rule_strings.len(), "Received combine request");

    let record = state
        .engine
        .create_combined_rule(&payload.rule_strings, payload.name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Evaluate a stored rule against submitted user data
pub(super) async fn evaluate_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EvaluateRuleRequest>,
) -> Result<Json<EvaluateRuleResponse>, ServerError> {
    let record = record_from_json(payload.user_data);
    let result = state.engine.evaluate_stored(&payload.rule_id, &record).await?;

    info!(rule_id = %payload.rule_id, result, "Evaluated rule");
    Ok(Json(EvaluateRuleResponse { result }))
}

pub(super) async fn list_rules(
    State(state): State<AppState>,
) -> Result<Json<RuleListResponse>, ServerError> {
    let rules: Vec<RuleResponse> = state
        .engine
        .list_rules()
        .await?
        .into_iter()
        .map(RuleResponse::from)
        .collect();

    Ok(Json(RuleListResponse {
        count: rules.len(),
        rules,
    }))
}

pub(super) async fn get_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RuleResponse>, ServerError> {
    let record = state.engine.get_rule(&id).await?;
    Ok(Json(record.into()))
}

pub(super) async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_rule(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
