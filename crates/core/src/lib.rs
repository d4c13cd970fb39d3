//! Domain types for the portfolio manager.
//!
//! Pure types and validation only -- no I/O. The store and API crates build
//! on these; the client crate reuses the same wire types so both sides of
//! the HTTP contract deserialize identically.

pub mod category;
pub mod error;
pub mod project;
pub mod types;
