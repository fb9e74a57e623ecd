use std::fmt;

use serde::Serialize;

/// Domain-level errors raised before a request reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A path segment could not be interpreted as a [`ContactId`](crate::types::ContactId).
    #[error("Cast to ContactId failed for value \"{value}\" at path \"{path}\"")]
    InvalidId { path: &'static str, value: String },
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldErrorKind {
    Required,
    Unique,
}

/// One rejected field inside a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: &'static str,
    pub kind: FieldErrorKind,
    pub message: String,
    pub value: Option<String>,
}

impl FieldError {
    pub fn required(path: &'static str) -> Self {
        Self {
            path,
            kind: FieldErrorKind::Required,
            message: format!("`{path}` is required"),
            value: None,
        }
    }

    pub fn unique(path: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            path,
            kind: FieldErrorKind::Unique,
            message: format!("`{path}` must be unique, \"{value}\" is already taken"),
            value: Some(value),
        }
    }
}

/// A write was rejected because one or more fields broke the contact schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Whether any field failed with the given kind.
    pub fn has_kind(&self, kind: FieldErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("contact validation failed")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{}: {}", error.path, error.message)?;
        }
        Ok(())
    }
}
