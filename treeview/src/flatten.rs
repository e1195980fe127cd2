//! Flattening the tree into renderable rows.

use crate::active;
use crate::node::{Children, Node, NodePath};
use crate::options::TreeOptions;
use crate::selection::Selection;

/// The expand/collapse control a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Leaf node, no control.
    None,
    /// Folded node, clicking expands it.
    Expand,
    /// Expanded node, clicking collapses it.
    Collapse,
}

/// A visible node in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position in the current row list. Reassigned on every render.
    pub row_id: usize,
    /// Depth in tree (1 = root).
    pub depth: u32,
    /// Whether the node's children are currently shown.
    pub has_visible_children: bool,
    /// Whether the node's children are currently folded away.
    pub has_hidden_children: bool,
    /// Icon identifier for the affordance, taken from the options.
    pub icon: Option<String>,
    pub is_selected: bool,
    /// Whether this node's own href is the current location.
    pub is_active: bool,
    /// Indentation units before the affordance or text.
    pub indent: u32,
    pub text: String,
    pub href: Option<String>,
    pub tags: Vec<String>,
    pub(crate) path: NodePath,
}

impl Row {
    pub fn affordance(&self) -> Affordance {
        if self.has_hidden_children {
            Affordance::Expand
        } else if self.has_visible_children {
            Affordance::Collapse
        } else {
            Affordance::None
        }
    }

    /// Whether the node has children in either slot.
    pub fn has_children(&self) -> bool {
        self.has_visible_children || self.has_hidden_children
    }
}

/// Flatten `forest` into rows in depth-first pre-order.
///
/// Only expanded children are descended into. Row ids are dense and
/// zero-based, in output order.
pub(crate) fn flatten(forest: &[Node], selection: &Selection, options: &TreeOptions) -> Vec<Row> {
    let mut flattener = Flattener {
        selection,
        options,
        path: Vec::new(),
        rows: Vec::new(),
    };
    flattener.collect(forest, 1);
    flattener.rows
}

struct Flattener<'a> {
    selection: &'a Selection,
    options: &'a TreeOptions,
    path: NodePath,
    rows: Vec<Row>,
}

impl Flattener<'_> {
    fn collect(&mut self, nodes: &[Node], depth: u32) {
        for (index, node) in nodes.iter().enumerate() {
            self.path.push(index);
            self.rows.push(self.row(node, depth));

            if let Children::Expanded(children) = node.children() {
                self.collect(children, depth + 1);
            }
            self.path.pop();
        }
    }

    fn row(&self, node: &Node, depth: u32) -> Row {
        let children = node.children();
        let icon = match children {
            Children::Leaf => None,
            Children::Expanded(_) => Some(self.options.collapse_icon.clone()),
            Children::Folded(_) => Some(self.options.expand_icon.clone()),
        };
        // Leaves get one extra unit to line up with siblings' affordances.
        let indent = if children.is_leaf() { depth } else { depth - 1 };

        Row {
            row_id: self.rows.len(),
            depth,
            has_visible_children: children.is_expanded(),
            has_hidden_children: children.is_folded(),
            icon,
            is_selected: self.selection.is_selected(&self.path),
            is_active: active::is_active(node, self.options.location.as_deref()),
            indent,
            text: node.text().to_string(),
            href: node.href().map(str::to_string),
            tags: node.tags().to_vec(),
            path: self.path.clone(),
        }
    }
}
