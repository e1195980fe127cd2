//! Active path resolution.
//!
//! A node is *active* when its own href equals the current location. It is
//! *on the active path* when it or any descendant is active. Descendants are
//! searched through both the expanded and the folded slot, since planning
//! runs while fold state is still being decided.

use crate::node::Node;

/// Whether `node` or any node beneath it links to `location`.
pub fn on_active_path(node: &Node, location: Option<&str>) -> bool {
    match location {
        Some(location) => contains_href(node, location),
        None => false,
    }
}

/// Whether `node` itself links to `location`. Descendants are not consulted.
pub fn is_active(node: &Node, location: Option<&str>) -> bool {
    location.is_some() && node.href() == location
}

fn contains_href(node: &Node, location: &str) -> bool {
    node.href() == Some(location)
        || node
            .children()
            .nodes()
            .iter()
            .any(|child| contains_href(child, location))
}
