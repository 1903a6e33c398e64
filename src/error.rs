/// Crate-wide error type for the form adapters
use thiserror::Error;

use crate::deep::ValidationError;

#[derive(Debug, Error)]
pub enum DeepFormError {
    /// An entry could not be folded into the nested object
    #[error("Invalid form entry: {0}")]
    Validation(#[from] ValidationError),

    /// The serialized deep form payload is not a valid nested object
    #[error("Malformed deep form payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Sending a deep form failed at the transport level
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The receiving server answered with a non-success status
    #[error("Submission rejected with status {0}")]
    Status(u16),

    /// The relay page could not be rendered
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
