//! Flat-file JSON persistence for the portfolio document.
//!
//! The entire data set lives in a single JSON file with two top-level
//! arrays, `personal` and `group`. Every mutation is a whole-document
//! read-modify-write; there is no locking, no transaction boundary, and
//! no partial update.

mod document;
mod store;

pub use document::ProjectDocument;
pub use store::{ProjectStoreFile, StoreError};
