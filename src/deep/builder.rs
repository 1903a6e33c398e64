/// Folding of ordered form entries into one nested container
use super::combine::combine;
use super::error::ValidationError;
use super::materialize::materialize_mut;
use super::node::{Container, Entry, Node};
use super::path::{split_with_max_depth, DEFAULT_MAX_DEPTH};

/// Incremental builder for a deep form object.
///
/// Entries are folded in the order they are pushed; that order decides which
/// value comes first when duplicate keys are merged.
#[derive(Debug)]
pub struct ObjectBuilder {
    root: Container,
    max_depth: usize,
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        ObjectBuilder::new()
    }
}

/// Seed the builder with an existing object; pushed entries are folded into it.
impl From<Container> for ObjectBuilder {
    fn from(root: Container) -> Self {
        ObjectBuilder {
            root,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ObjectBuilder {
    pub fn new() -> Self {
        ObjectBuilder::from(Container::new())
    }

    /// Limit the number of segments accepted in one key
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Add one entry.
    ///
    /// A failed push leaves the builder exactly as it was: keys are validated
    /// before anything is inserted, and a path conflict can only arise on
    /// segments that already existed.
    pub fn push(&mut self, entry: impl Into<Entry>) -> Result<&mut Self, ValidationError> {
        let Entry { key, value } = entry.into();
        let segments = split_with_max_depth(&key, self.max_depth)?;
        let (leaf, intermediate) = match segments.split_last() {
            Some(parts) => parts,
            None => return Err(ValidationError::EmptyKey),
        };
        let parent = if intermediate.is_empty() {
            &mut self.root
        } else {
            materialize_mut(&mut self.root, intermediate)?
        };
        tracing::trace!(key = %key, "Folding entry");
        parent.update_with(leaf, |existing| combine(existing, Node::Scalar(value)));
        Ok(self)
    }

    /// Fold every entry in order and return the finished object.
    ///
    /// Fails fast: the first invalid entry aborts the whole build.
    pub fn fold<I>(mut self, entries: I) -> Result<Container, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let mut count = 0usize;
        for entry in entries {
            self.push(entry)?;
            count += 1;
        }
        tracing::debug!(entries = count, "Built deep form object");
        Ok(self.finish())
    }

    pub fn finish(self) -> Container {
        self.root
    }
}

/// Build a nested container from an ordered sequence of entries.
///
/// Fails fast: the first invalid entry aborts the whole build.
///
/// # Examples
///
/// ```
/// use deepform::deep::build;
///
/// let obj = build(vec![("k1", "v1"), ("k1", "v2"), ("k2.k1", "v3")]).unwrap();
/// assert_eq!(
///     serde_json::to_string(&obj).unwrap(),
///     r#"{"k1":["v1","v2"],"k2":{"k1":"v3"}}"#
/// );
/// ```
pub fn build<I>(entries: I) -> Result<Container, ValidationError>
where
    I: IntoIterator,
    I::Item: Into<Entry>,
{
    ObjectBuilder::new().fold(entries)
}
