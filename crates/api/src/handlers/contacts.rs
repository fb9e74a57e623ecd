//! Handlers for the contact pages.
//!
//! Each handler performs at most one store call. Store and cast errors are
//! propagated with `?` and rendered by [`AppError`](crate::error::AppError).

use axum::extract::{Path, State};
use contacts_core::contact;
use contacts_db::models::contact::{CreateContact, UpdateContact};
use maud::Markup;

use crate::error::AppResult;
use crate::extract::ContactForm;
use crate::response::Found;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn root() -> Found {
    Found::to("/contacts")
}

/// GET /contacts
pub async fn index(State(state): State<AppState>) -> AppResult<Markup> {
    let contacts = state.store.list_all().await?;
    Ok(views::contacts::index(&contacts))
}

/// GET /contacts/new
pub async fn new_form() -> Markup {
    views::contacts::new_form()
}

/// POST /contacts
pub async fn create(
    State(state): State<AppState>,
    ContactForm(input): ContactForm<CreateContact>,
) -> AppResult<Found> {
    let created = state.store.create(input).await?;

    tracing::info!(contact_id = %created.id, "Contact created");

    Ok(Found::to("/contacts"))
}

/// GET /contacts/{id}
///
/// An unknown ID renders the not-found page rather than an error.
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Markup> {
    let id = contact::parse_id(&raw_id)?;
    let found = state.store.find_by_id(id).await?;
    Ok(views::contacts::show(found.as_ref()))
}

/// GET /contacts/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Markup> {
    let id = contact::parse_id(&raw_id)?;
    let found = state.store.find_by_id(id).await?;
    Ok(views::contacts::edit(found.as_ref()))
}

/// PUT /contacts/{id}
///
/// Redirects to the detail page whether or not a contact matched; a miss is
/// logged and the detail page then renders its not-found notice.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ContactForm(input): ContactForm<UpdateContact>,
) -> AppResult<Found> {
    let id = contact::parse_id(&raw_id)?;

    match state.store.update_by_id(id, input).await? {
        Some(_) => tracing::info!(contact_id = %id, "Contact updated"),
        None => tracing::warn!(contact_id = %id, "Update matched no contact"),
    }

    Ok(Found::to(format!("/contacts/{id}")))
}

/// DELETE /contacts/{id}
///
/// Deleting a missing contact is not an error.
pub async fn destroy(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Found> {
    let id = contact::parse_id(&raw_id)?;
    let removed = state.store.delete_by_id(id).await?;

    tracing::info!(contact_id = %id, removed, "Contact deleted");

    Ok(Found::to("/contacts"))
}
