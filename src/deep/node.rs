/// Value model of a deep form: scalars, merged collections and nested containers
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One submitted form field: a key (possibly deep) and its string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

/// A value stored in the nested output.
///
/// Serializes to JSON as a string, an array or an object respectively; any
/// other JSON value fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A single submitted value
    Scalar(String),
    /// Values merged from duplicate keys, in submission order
    Collection(Vec<Node>),
    /// A nesting level keyed by segment name
    Container(Container),
}

impl Default for Node {
    fn default() -> Self {
        Node::Container(Container::new())
    }
}

impl Node {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Node]> {
        match self {
            Node::Collection(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Collection(items)
    }
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::Container(c)
    }
}

/// Insertion-ordered map from segment name to [`Node`].
///
/// Order is kept so serialized output reads in submission order, but it does
/// not take part in equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container {
    fields: IndexMap<String, Node>,
}

impl Container {
    pub fn new() -> Self {
        Container {
            fields: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.fields.get_mut(key)
    }

    /// Insert or replace the value at `key`, returning the previous value.
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.fields.insert(key.into(), node)
    }

    /// Replace the value at `key` with `f(previous)`, in place.
    pub fn update_with<F>(&mut self, key: &str, f: F)
    where
        F: FnOnce(Option<Node>) -> Node,
    {
        match self.fields.get_mut(key) {
            Some(slot) => {
                let previous = std::mem::take(slot);
                *slot = f(Some(previous));
            }
            None => {
                self.fields.insert(key.to_string(), f(None));
            }
        }
    }

    /// Return the container stored at `key`, inserting an empty one if the key is
    /// absent. `None` when a non-container value already occupies the key.
    pub fn child_container_mut(&mut self, key: &str) -> Option<&mut Container> {
        if !self.fields.contains_key(key) {
            self.fields
                .insert(key.to_string(), Node::Container(Container::new()));
        }
        match self.fields.get_mut(key) {
            Some(Node::Container(c)) => Some(c),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Container {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Container {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
