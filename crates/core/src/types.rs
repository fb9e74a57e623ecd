/// Contacts are keyed by a store-assigned UUIDv7.
pub type ContactId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
