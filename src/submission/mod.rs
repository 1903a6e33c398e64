//! Outgoing side of a deep form.
//!
//! The captured fields of a form are folded into one nested object, serialized
//! to JSON and sent on as a single field, either through a self-submitting
//! relay page ([`RelayForm`]) or directly over HTTP ([`DeepFormClient`]).

mod client;
mod relay;

pub use client::DeepFormClient;
pub use relay::{is_valid_attribute_name, FormSnapshot, RelayForm};

use crate::deep::{Entry, ObjectBuilder};
use crate::error::DeepFormError;

/// Fold entries into a nested object and serialize it to JSON.
///
/// Keys with more than `max_depth` segments are rejected.
pub fn serialize_deep_form<I>(entries: I, max_depth: usize) -> Result<String, DeepFormError>
where
    I: IntoIterator,
    I::Item: Into<Entry>,
{
    let obj = ObjectBuilder::new().with_max_depth(max_depth).fold(entries)?;
    Ok(serde_json::to_string(&obj)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep::{ValidationError, DEFAULT_MAX_DEPTH};

    #[test]
    fn test_serialize_deep_form() {
        let json = serialize_deep_form(vec![("k1", "v1"), ("k1", "v2"), ("k2.k1", "v3")], DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(json, r#"{"k1":["v1","v2"],"k2":{"k1":"v3"}}"#);
    }

    #[test]
    fn test_serialize_deep_form_rejects_bad_key() {
        let err = serialize_deep_form(vec![("", "v")], DEFAULT_MAX_DEPTH).unwrap_err();
        assert!(matches!(err, DeepFormError::Validation(_)));
    }

    #[test]
    fn test_serialize_deep_form_honours_max_depth() {
        assert!(serialize_deep_form(vec![("a.b", "v")], 2).is_ok());
        let err = serialize_deep_form(vec![("a.b.c", "v")], 2).unwrap_err();
        assert!(matches!(
            err,
            DeepFormError::Validation(ValidationError::TooDeep { depth: 3, max_depth: 2 })
        ));
    }
}
