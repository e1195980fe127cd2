//! Initial expansion planning.

use crate::active;
use crate::node::Node;
use crate::options::TreeOptions;

/// Set the initial fold state of every node in `forest`.
///
/// A node at depth `d` (roots are depth 1) with children is folded when
/// `d >= levels`, unless the active path exemption is enabled and the node
/// is on the active path. The walk always continues into the children,
/// folded or not, so every node gets its own decision.
pub(crate) fn plan(forest: &mut [Node], options: &TreeOptions) {
    plan_level(forest, 1, options);
}

fn plan_level(nodes: &mut [Node], depth: u32, options: &TreeOptions) {
    let location = options.location.as_deref();
    for node in nodes {
        let exempt = options.expand_active_tree && active::on_active_path(node, location);
        if depth >= options.effective_levels() && !exempt && node.fold() {
            log::debug!("[treeview] folded '{}' at depth {}", node.text(), depth);
        }
        plan_level(node.children_mut().nodes_mut(), depth + 1, options);
    }
}
