//! Route definitions for contacts.

use axum::routing::get;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Contact routes.
///
/// ```text
/// GET    /contacts            -> index
/// POST   /contacts            -> create
/// GET    /contacts/new        -> new_form
/// GET    /contacts/{id}       -> show
/// PUT    /contacts/{id}       -> update
/// DELETE /contacts/{id}       -> destroy
/// GET    /contacts/{id}/edit  -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(contacts::index).post(contacts::create))
        .route("/contacts/new", get(contacts::new_form))
        .route(
            "/contacts/{id}",
            get(contacts::show)
                .put(contacts::update)
                .delete(contacts::destroy),
        )
        .route("/contacts/{id}/edit", get(contacts::edit))
}
