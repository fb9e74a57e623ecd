//! Application assembly shared by `main` and the integration tests.

use std::time::Duration;

use axum::extract::Request;
use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::method_override::override_method;
use crate::routes;
use crate::state::AppState;

/// The fully assembled service: the router wrapped in method override.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the router with its middleware stack and static-asset fallback.
pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let static_files = ServeDir::new(&state.config.static_dir);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    routes::app_routes()
        // Unmatched paths are served from the static directory.
        .fallback_service(static_files)
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Build the complete application.
///
/// Method override wraps the router from the outside so that the rewritten
/// method is the one used for route matching.
pub fn build_app(state: AppState) -> App {
    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(build_router(state))
}
