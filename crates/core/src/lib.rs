//! Domain types and rules for the contacts service.
//!
//! Nothing in this crate performs I/O; the store and router crates build on
//! these types.

pub mod contact;
pub mod error;
pub mod types;
