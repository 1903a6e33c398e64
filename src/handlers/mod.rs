pub mod demo;
pub mod extract;
pub mod helpers;
pub mod middleware;

pub use extract::DeepForm;
pub use middleware::{deep_form_middleware, parse_deep_form_body};
