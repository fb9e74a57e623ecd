use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contacts_core::error::{CoreError, ValidationError};
use contacts_db::store::StoreError;
use serde_json::{json, Map, Value};

/// Application-level error type for HTTP handlers.
///
/// Every variant is returned to the client as the raw error serialized to a
/// JSON object. There is no status mapping: the response is `200 OK` with the
/// error as its body, and the message is not sanitized.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `contacts_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the contact store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The error as the JSON object sent to the client.
    ///
    /// Every object carries `name` (the error kind) and `message`.
    pub fn to_json(&self) -> Value {
        match self {
            AppError::Store(StoreError::Validation(err)) => validation_json(err),
            AppError::Core(CoreError::InvalidId { path, value }) => json!({
                "name": "CastError",
                "kind": "ContactId",
                "path": path,
                "value": value,
                "message": self.to_string(),
            }),
            AppError::Store(StoreError::Database(err)) => json!({
                "name": "StoreConnectionError",
                "message": err.to_string(),
            }),
            AppError::BadRequest(msg) => json!({
                "name": "BadRequestError",
                "message": msg,
            }),
        }
    }
}

fn validation_json(err: &ValidationError) -> Value {
    let errors: Map<String, Value> = err
        .errors
        .iter()
        .map(|e| (e.path.to_string(), json!(e)))
        .collect();
    json!({
        "name": "ValidationError",
        "message": err.to_string(),
        "errors": errors,
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Contact store error");
            }
            other => {
                tracing::warn!(error = %other, "Request rejected");
            }
        }

        (StatusCode::OK, axum::Json(self.to_json())).into_response()
    }
}
