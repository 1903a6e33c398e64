/// Merge policy for values landing on an already-occupied leaf
use super::node::Node;

/// Combine the value already stored at a leaf with an incoming one.
///
/// - nothing stored: the incoming value is used as-is
/// - a collection stored: the incoming value is appended as one new element,
///   so an incoming collection is nested rather than concatenated
/// - anything else stored: both values are wrapped in a two-element collection
///
/// ```
/// use deepform::deep::{combine, Node};
///
/// let pair = combine(Some(Node::from("a")), Node::from("b"));
/// assert_eq!(pair, Node::Collection(vec![Node::from("a"), Node::from("b")]));
/// ```
pub fn combine(existing: Option<Node>, incoming: Node) -> Node {
    match existing {
        None => incoming,
        Some(Node::Collection(mut items)) => {
            items.push(incoming);
            Node::Collection(items)
        }
        Some(other) => Node::Collection(vec![other, incoming]),
    }
}
