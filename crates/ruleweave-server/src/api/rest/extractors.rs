//! Request body extraction
//!
//! Bodies that fail to decode become `ServerError::InvalidRequest`, so the
//! client sees the usual `{error, status}` payload.

use crate::error::ServerError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections are reported as `ServerError`
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        Ok(Self(body))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ServerError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Rule requests must be sent as application/json".to_string()
        }
        JsonRejection::JsonSyntaxError(err) => {
            format!("Request body is not valid JSON: {}", err.body_text())
        }
        JsonRejection::JsonDataError(err) => {
            format!("Request body does not match the rule request: {}", err.body_text())
        }
        other => format!("Unreadable request body: {}", other.body_text()),
    };
    tracing::warn!(status = %rejection.status(), error = %message, "Rejected request body");
    ServerError::InvalidRequest(message)
}
