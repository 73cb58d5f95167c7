//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use ruleweave_sdk::RuleEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: Arc<RuleEngine>, enable_cors: bool) -> Router {
    let state = AppState { engine };

    let rules = Router::new()
        .route("/", get(list_rules))
        .route("/create_rule", post(create_rule))
        .route("/combine_rules", post(combine_rules))
        .route("/evaluate_rule", post(evaluate_rule))
        .route("/:id", get(get_rule).delete(delete_rule));

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/rules", rules)
        .with_state(state);

    let router = if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
