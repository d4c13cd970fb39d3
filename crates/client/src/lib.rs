//! Client controller for the portfolio API.
//!
//! Three pieces, composed by the embedding frontend:
//!
//! - [`api::ApiClient`] talks the JSON envelope contract over HTTP.
//! - [`controller::Controller`] holds the local mirror of both project
//!   collections plus the add-project form state machine. It never touches
//!   the network itself: `submit`/`confirm_delete` hand the caller a request
//!   to perform, and the caller reports back via `*_succeeded`/`*_failed`.
//!   The mirror is only mutated after a confirmed successful response.
//! - [`render`] is a pure function of (collections, form state) producing
//!   the page HTML.

pub mod api;
pub mod controller;
pub mod render;
