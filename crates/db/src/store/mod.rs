//! The contact store seam.
//!
//! Handlers hold an `Arc<dyn ContactStore>` and make exactly one call per
//! request. "Not found" is `Ok(None)`; only schema violations and
//! infrastructure failures are errors.

use async_trait::async_trait;
use contacts_core::error::ValidationError;
use contacts_core::types::ContactId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

mod memory;
mod postgres;

pub use memory::MemoryContactStore;
pub use postgres::PgContactStore;

/// Errors surfaced by a [`ContactStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write broke the contact schema (missing or duplicate `name`).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The database was unreachable or rejected the call.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for contacts.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Every contact. Order is not part of the contract.
    async fn list_all(&self) -> StoreResult<Vec<Contact>>;

    /// Insert a contact and return it with its assigned ID.
    async fn create(&self, input: CreateContact) -> StoreResult<Contact>;

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Apply the fields present in `input`. Returns the before or after
    /// snapshot depending on the store's configuration, or `None` if no
    /// contact has this ID.
    async fn update_by_id(&self, id: ContactId, input: UpdateContact)
        -> StoreResult<Option<Contact>>;

    /// Remove a contact. Returns whether anything was removed; deleting a
    /// missing ID is not an error.
    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool>;

    /// Cheap liveness check.
    async fn ping(&self) -> StoreResult<()>;
}
