//! Nested objects from flat HTML form submissions.
//!
//! Form field names use `.` to describe a path (`person.address.city`); the
//! [`deep`] module folds the submitted fields into one nested object, merging
//! repeated names into ordered collections. [`submission`] sends that object
//! on as a single JSON field and [`handlers`] decodes it again on the
//! receiving axum server.

pub mod config;
pub mod deep;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod submission;
pub mod templates;
pub mod utils;

pub use deep::{build, Container, Entry, Node, ValidationError};
pub use error::DeepFormError;
