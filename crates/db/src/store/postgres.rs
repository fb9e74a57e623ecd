use async_trait::async_trait;
use contacts_core::contact;
use contacts_core::types::ContactId;

use super::{ContactStore, StoreError, StoreResult};
use crate::models::contact::{Contact, CreateContact, ReturnDocument, UpdateContact};
use crate::repositories::{ContactRepo, NAME_CONSTRAINT};
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// [`ContactStore`] backed by the `contacts` table.
#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
    returning: ReturnDocument,
}

impl PgContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            returning: ReturnDocument::default(),
        }
    }

    /// Choose which snapshot `update_by_id` returns.
    pub fn with_return_document(mut self, returning: ReturnDocument) -> Self {
        self.returning = returning;
        self
    }
}

/// Translate a write failure, turning a `name` unique violation into a
/// validation error.
fn map_write_error(err: sqlx::Error, name: Option<&str>) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
            && db_err.constraint() == Some(NAME_CONSTRAINT)
        {
            tracing::debug!(constraint = NAME_CONSTRAINT, "Contact name already taken");
            return contact::duplicate_name(name.unwrap_or_default()).into();
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(ContactRepo::list_all(&self.pool).await?)
    }

    async fn create(&self, input: CreateContact) -> StoreResult<Contact> {
        let name = contact::require_name(input.name.as_deref())?;
        ContactRepo::create(
            &self.pool,
            ContactId::now_v7(),
            name,
            input.email.as_deref(),
            input.phone.as_deref(),
        )
        .await
        .map_err(|e| map_write_error(e, Some(name)))
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(ContactRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_by_id(
        &self,
        id: ContactId,
        input: UpdateContact,
    ) -> StoreResult<Option<Contact>> {
        contact::check_name_update(input.name.as_deref())?;
        ContactRepo::update(&self.pool, id, &input, self.returning)
            .await
            .map_err(|e| map_write_error(e, input.name.as_deref()))
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool> {
        Ok(ContactRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
