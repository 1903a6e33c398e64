/// Creation of the intermediate containers along a deep key
use super::error::ValidationError;
use super::node::Container;
use super::path::{join, DEFAULT_MAX_DEPTH};

/// Return a copy of `root` in which every segment of `segments` exists as a
/// nested container.
///
/// Missing segments get an empty container. Existing values are never removed
/// or overwritten: a scalar or collection at the last segment is left as it
/// is, while one at an earlier segment cannot be descended through and yields
/// [`ValidationError::PathConflict`]. Paths longer than
/// [`DEFAULT_MAX_DEPTH`] are rejected with [`ValidationError::TooDeep`].
///
/// `root` is not modified and the result shares nothing with it.
pub fn materialize<S: AsRef<str>>(root: &Container, segments: &[S]) -> Result<Container, ValidationError> {
    check_segments(segments)?;
    if segments.len() > DEFAULT_MAX_DEPTH {
        return Err(ValidationError::TooDeep {
            depth: segments.len(),
            max_depth: DEFAULT_MAX_DEPTH,
        });
    }
    let mut copy = root.clone();
    let (last, intermediate) = match segments.split_last() {
        Some(parts) => parts,
        None => return Err(ValidationError::EmptyPath),
    };
    let parent = descend(&mut copy, intermediate)?;
    if !parent.contains_key(last.as_ref()) {
        parent.insert(last.as_ref(), Container::new().into());
    }
    Ok(copy)
}

/// In-place variant used by the builder: ensures every segment exists as a
/// container and returns the innermost one.
pub(crate) fn materialize_mut<'a, S: AsRef<str>>(
    root: &'a mut Container,
    segments: &[S],
) -> Result<&'a mut Container, ValidationError> {
    check_segments(segments)?;
    descend(root, segments)
}

fn check_segments<S: AsRef<str>>(segments: &[S]) -> Result<(), ValidationError> {
    if segments.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if segments.iter().any(|s| s.as_ref().is_empty()) {
        return Err(ValidationError::EmptySegment { key: join(segments) });
    }
    Ok(())
}

fn descend<'a, S: AsRef<str>>(
    root: &'a mut Container,
    segments: &[S],
) -> Result<&'a mut Container, ValidationError> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = match current.child_container_mut(segment.as_ref()) {
            Some(child) => child,
            None => {
                return Err(ValidationError::PathConflict {
                    path: join(&segments[..=depth]),
                })
            }
        };
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep::Node;
    use serde_json::json;

    fn to_json(c: &Container) -> serde_json::Value {
        serde_json::to_value(c).unwrap()
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(materialize(&Container::new(), &empty), Err(ValidationError::EmptyPath));
    }

    #[test]
    fn test_empty_segment_is_rejected() {
        assert_eq!(
            materialize(&Container::new(), &["a", "", "c"]),
            Err(ValidationError::EmptySegment { key: "a..c".to_string() })
        );
    }

    #[test]
    fn test_single_segment_on_blank_root() {
        let out = materialize(&Container::new(), &["a"]).unwrap();
        assert_eq!(to_json(&out), json!({"a": {}}));
    }

    #[test]
    fn test_multi_segment_on_blank_root() {
        let out = materialize(&Container::new(), &["a", "b", "c"]).unwrap();
        assert_eq!(to_json(&out), json!({"a": {"b": {"c": {}}}}));
    }

    #[test]
    fn test_existing_value_at_last_segment_is_untouched() {
        let mut root = Container::new();
        root.insert("a", Node::from("123"));
        let out = materialize(&root, &["a"]).unwrap();
        assert_eq!(out, root);
    }

    #[test]
    fn test_existing_structure_is_unaltered() {
        let root = materialize(&Container::new(), &["a", "b", "c"]).unwrap();
        let out = materialize(&root, &["a", "b", "c"]).unwrap();
        assert_eq!(to_json(&out), json!({"a": {"b": {"c": {}}}}));
    }

    #[test]
    fn test_only_new_branch_is_added() {
        let mut root = Container::new();
        root.insert("k1", Node::from("v1"));
        let root = materialize(&root, &["k2", "x"]).unwrap();
        let out = materialize(&root, &["k2", "y"]).unwrap();
        assert_eq!(to_json(&out), json!({"k1": "v1", "k2": {"x": {}, "y": {}}}));
    }

    #[test]
    fn test_input_root_is_not_modified() {
        let mut root = Container::new();
        root.insert("a", Node::from(Container::new()));
        let before = root.clone();
        let _ = materialize(&root, &["a", "b"]).unwrap();
        assert_eq!(root, before);
    }

    #[test]
    fn test_scalar_in_the_middle_is_a_conflict() {
        let mut root = Container::new();
        root.insert("a", Node::from("x"));
        assert_eq!(
            materialize(&root, &["a", "b"]),
            Err(ValidationError::PathConflict { path: "a".to_string() })
        );
    }

    #[test]
    fn test_overlong_path_is_rejected() {
        let segments = vec!["a"; DEFAULT_MAX_DEPTH + 1];
        assert!(matches!(
            materialize(&Container::new(), &segments),
            Err(ValidationError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_materialize_mut_returns_innermost() {
        let mut root = Container::new();
        let inner = materialize_mut(&mut root, &["a", "b"]).unwrap();
        inner.insert("c", Node::from("v"));
        assert_eq!(to_json(&root), json!({"a": {"b": {"c": "v"}}}));
    }
}
