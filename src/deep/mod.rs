//! Deep key transform.
//!
//! Turns an ordered list of form entries whose keys use `.` as a path
//! delimiter into one nested object. Colliding keys are merged into ordered
//! collections instead of overwriting each other.
//!
//! ```
//! use deepform::deep::build;
//!
//! let obj = build(vec![
//!     ("person.name", "Ada"),
//!     ("person.langs", "en"),
//!     ("person.langs", "fr"),
//! ])
//! .unwrap();
//! assert_eq!(
//!     serde_json::to_string(&obj).unwrap(),
//!     r#"{"person":{"name":"Ada","langs":["en","fr"]}}"#
//! );
//! ```

mod builder;
mod combine;
mod error;
mod materialize;
mod node;
mod path;

pub use builder::{build, ObjectBuilder};
pub use combine::combine;
pub use error::ValidationError;
pub use materialize::materialize;
pub use node::{Container, Entry, Node};
pub use path::{join, split, split_with_max_depth, DEFAULT_MAX_DEPTH, DELIMITER};
