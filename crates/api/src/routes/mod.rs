pub mod contacts;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                            redirect to /contacts
/// /health                      liveness check
/// /contacts                    list, create
/// /contacts/new                creation form
/// /contacts/{id}               show, update, delete
/// /contacts/{id}/edit          edit form
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::contacts::root))
        .merge(health::router())
        .merge(contacts::router())
}
