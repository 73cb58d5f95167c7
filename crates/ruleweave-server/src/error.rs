//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ruleweave_sdk::SdkError;
use serde_json::json;
use thiserror::Error;

/// Server error type
#[derive(Error, Debug)]
pub enum ServerError {
    /// Malformed request or invalid rule text
    #[error("{0}")]
    InvalidRequest(String),

    /// Unknown rule identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rule could not be evaluated against the submitted data
    #[error("{0}")]
    Evaluation(String),

    /// Storage or other internal failure
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::InvalidRule(e) => ServerError::InvalidRequest(e.to_string()),
            SdkError::NotFound(id) => ServerError::NotFound(format!("rule {}", id)),
            e @ SdkError::Evaluation(_) => ServerError::Evaluation(e.to_string()),
            e @ (SdkError::Repository(_) | SdkError::Config(_)) => {
                ServerError::InternalError(e.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
