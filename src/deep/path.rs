/// Splitting of "deep" keys into path segments
use super::error::ValidationError;

/// Delimiter separating the segments of a deep key
pub const DELIMITER: char = '.';

/// Maximum number of segments accepted in one key.
///
/// Keeps the nested output, and its JSON encoding including a merged
/// collection at the leaf, well inside serde_json's recursion limit of 128.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Split a deep key such as `person.details.name` into its segments.
///
/// A key without a delimiter yields a single segment. Empty keys, keys with
/// empty segments and keys deeper than [`DEFAULT_MAX_DEPTH`] are rejected;
/// there is no escaping of a literal `.`.
///
/// # Examples
///
/// ```
/// use deepform::deep::split;
///
/// assert_eq!(split("person.details.name").unwrap(), vec!["person", "details", "name"]);
/// assert_eq!(split("name").unwrap(), vec!["name"]);
/// assert!(split("").is_err());
/// ```
pub fn split(key: &str) -> Result<Vec<&str>, ValidationError> {
    split_with_max_depth(key, DEFAULT_MAX_DEPTH)
}

/// [`split`] with an explicit segment limit
pub fn split_with_max_depth(key: &str, max_depth: usize) -> Result<Vec<&str>, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }
    // Counted before splitting so an oversized key never allocates its segments.
    let depth = key.matches(DELIMITER).count() + 1;
    if depth > max_depth {
        return Err(ValidationError::TooDeep { depth, max_depth });
    }
    let segments: Vec<&str> = key.split(DELIMITER).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(ValidationError::EmptySegment { key: key.to_string() });
    }
    Ok(segments)
}

/// Join segments back into a deep key
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}
