use crate::deep::Node;

/// Render a node as a short single-line string for tables and logs
pub fn node_to_short_string(node: &Node) -> String {
    match node {
        Node::Scalar(s) => s.to_string(),
        Node::Collection(items) => items
            .iter()
            .map(node_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Node::Container(obj) => {
            let mut parts = Vec::new();
            for (key, val) in obj.iter() {
                parts.push(format!("{}: {}", key, node_to_short_string(val)));
            }
            parts.join(", ")
        }
    }
}
