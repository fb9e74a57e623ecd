//! Response helpers shared by handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// A `302 Found` redirect.
///
/// Browsers re-request the target with GET, which is what the form flows
/// (create, update, delete) expect.
#[derive(Debug, Clone)]
pub struct Found(pub String);

impl Found {
    pub fn to(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}
