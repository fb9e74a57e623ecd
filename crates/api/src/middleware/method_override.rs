//! HTML forms can only submit GET and POST. A POST carrying `_method=PUT` or
//! `_method=DELETE` in its query string, or an `X-HTTP-Method-Override`
//! header, is rewritten to that method before routing.
//!
//! This must wrap the whole [`Router`](axum::Router) rather than be added with
//! `Router::layer`, because layers added there run after a route has already
//! been matched.

use axum::extract::{Query, Request};
use axum::http::{HeaderName, Method};
use serde::Deserialize;

/// Header consulted before the query string.
pub static OVERRIDE_HEADER: HeaderName = HeaderName::from_static("x-http-method-override");

#[derive(Debug, Deserialize)]
struct OverrideParams {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Rewrite an overridden POST into the requested method.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let requested = req
        .headers()
        .get(&OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            Query::<OverrideParams>::try_from_uri(req.uri())
                .ok()
                .and_then(|Query(params)| params.method)
        });

    if let Some(method) = requested.as_deref().and_then(allowed_method) {
        tracing::debug!(uri = %req.uri(), %method, "Method override");
        *req.method_mut() = method;
    }
    req
}

fn allowed_method(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
