//! Schema rules for contact records.
//!
//! `name` is the only required field and must be unique across live
//! contacts. Uniqueness needs the store to check; presence is checked here so
//! every store implementation rejects the same inputs.

use crate::error::{CoreError, FieldError, ValidationError};
use crate::types::ContactId;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

/// Require a non-empty `name` on create.
pub fn require_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(ValidationError::single(FieldError::required(NAME))),
    }
}

/// On update `name` may be omitted, but it may not be cleared.
pub fn check_name_update(name: Option<&str>) -> Result<(), ValidationError> {
    match name {
        Some("") => Err(ValidationError::single(FieldError::required(NAME))),
        _ => Ok(()),
    }
}

/// Build the error reported when `name` collides with another contact.
pub fn duplicate_name(name: &str) -> ValidationError {
    ValidationError::single(FieldError::unique(NAME, name))
}

/// Parse a path segment into a [`ContactId`].
pub fn parse_id(raw: &str) -> Result<ContactId, CoreError> {
    raw.parse().map_err(|_| CoreError::InvalidId {
        path: "id",
        value: raw.to_string(),
    })
}
