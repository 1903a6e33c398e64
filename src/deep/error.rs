/// Error types for the deep key transform
use thiserror::Error;

/// Input-validation failures raised while splitting, materializing or building.
///
/// Any of these aborts the whole build; no partial object is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The key was an empty string
    #[error("Key must be a non-empty string")]
    EmptyKey,

    /// The key contained an empty segment, e.g. `a..b` or a leading/trailing `.`
    #[error("Key '{key}' contains an empty segment")]
    EmptySegment {
        /// The offending key (or segment list joined on '.')
        key: String,
    },

    /// The key nests deeper than the configured maximum
    #[error("Key nests {depth} levels deep, the maximum is {max_depth}")]
    TooDeep {
        /// Number of segments in the key
        depth: usize,
        /// Maximum number of segments accepted
        max_depth: usize,
    },

    /// Materialization was asked for a zero-length path
    #[error("Path must contain at least one segment")]
    EmptyPath,

    /// A scalar or collection already occupies a segment the path must descend through
    #[error("Cannot nest under '{path}': a non-object value is already stored there")]
    PathConflict {
        /// Segments up to and including the blocked one, joined on '.'
        path: String,
    },
}
