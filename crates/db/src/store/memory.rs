use async_trait::async_trait;
use chrono::Utc;
use contacts_core::contact;
use contacts_core::types::ContactId;
use tokio::sync::RwLock;

use super::{ContactStore, StoreResult};
use crate::models::contact::{Contact, CreateContact, ReturnDocument, UpdateContact};

/// [`ContactStore`] holding contacts in process memory.
///
/// Applies the same schema rules as the Postgres store, including the
/// unique `name` constraint. Contacts are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
    returning: ReturnDocument,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which snapshot `update_by_id` returns.
    pub fn with_return_document(mut self, returning: ReturnDocument) -> Self {
        self.returning = returning;
        self
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn create(&self, input: CreateContact) -> StoreResult<Contact> {
        let name = contact::require_name(input.name.as_deref())?;
        let mut contacts = self.contacts.write().await;
        if contacts.iter().any(|c| c.name == name) {
            return Err(contact::duplicate_name(name).into());
        }

        let now = Utc::now();
        let created = Contact {
            id: ContactId::now_v7(),
            name: name.to_string(),
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        };
        contacts.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        Ok(self.contacts.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ContactId,
        input: UpdateContact,
    ) -> StoreResult<Option<Contact>> {
        contact::check_name_update(input.name.as_deref())?;
        let mut contacts = self.contacts.write().await;

        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(name) = input.name.as_deref() {
            if contacts.iter().any(|c| c.id != id && c.name == name) {
                return Err(contact::duplicate_name(name).into());
            }
        }

        let existing = &mut contacts[index];
        let before = existing.clone();

        if let Some(name) = input.name {
            existing.name = name;
        }
        if let Some(email) = input.email {
            existing.email = Some(email);
        }
        if let Some(phone) = input.phone {
            existing.phone = Some(phone);
        }
        existing.updated_at = Utc::now();

        Ok(Some(match self.returning {
            ReturnDocument::Before => before,
            ReturnDocument::After => existing.clone(),
        }))
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<bool> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
