//! REST API implementation
//!
//! - types: request/response type definitions
//! - extractors: JSON extractor with readable rejections
//! - conversions: JSON to record conversion
//! - handlers: endpoint handlers
//! - router: router creation and configuration

mod conversions;
mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AppState, CombineRulesRequest, CreateRuleRequest, EvaluateRuleRequest, EvaluateRuleResponse,
    HealthResponse, RuleListResponse, RuleResponse,
};
