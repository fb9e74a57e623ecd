//! SQL access, one struct per table.

mod contact_repo;

pub use contact_repo::ContactRepo;
pub(crate) use contact_repo::NAME_CONSTRAINT;
