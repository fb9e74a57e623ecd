//! Repository for the `contacts` table.

use sqlx::PgPool;
use contacts_core::types::ContactId;

use crate::models::contact::{Contact, ReturnDocument, UpdateContact};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, phone, created_at, updated_at";

/// Column list qualified with the `previous` CTE used by updates.
const PREVIOUS_COLUMNS: &str = "\
    previous.id, previous.name, previous.email, previous.phone, \
    previous.created_at, previous.updated_at";

/// Column list qualified with the updated table alias.
const UPDATED_COLUMNS: &str = "c.id, c.name, c.email, c.phone, c.created_at, c.updated_at";

/// Name of the unique constraint on `contacts.name`.
pub(crate) const NAME_CONSTRAINT: &str = "uq_contacts_name";

/// Provides data access for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// List every contact, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at, id");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Insert a contact whose fields have already been validated.
    pub async fn create(
        pool: &PgPool,
        id: ContactId,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (id, name, email, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(phone)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its ID.
    pub async fn find_by_id(pool: &PgPool, id: ContactId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a contact.
    ///
    /// Uses `COALESCE` so only provided fields are changed. The snapshot to
    /// return is captured in the same statement, so `Before` still costs one
    /// round trip. Returns `None` if no contact has this ID.
    pub async fn update(
        pool: &PgPool,
        id: ContactId,
        dto: &UpdateContact,
        returning: ReturnDocument,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let returned = match returning {
            ReturnDocument::Before => PREVIOUS_COLUMNS,
            ReturnDocument::After => UPDATED_COLUMNS,
        };
        let query = format!(
            "WITH previous AS ( \
                 SELECT {COLUMNS} FROM contacts WHERE id = $1 FOR UPDATE \
             ) \
             UPDATE contacts c SET \
                 name = COALESCE($2, c.name), \
                 email = COALESCE($3, c.email), \
                 phone = COALESCE($4, c.phone), \
                 updated_at = NOW() \
             FROM previous \
             WHERE c.id = previous.id \
             RETURNING {returned}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: ContactId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
