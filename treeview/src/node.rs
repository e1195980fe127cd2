//! Node model.
//!
//! [`NodeData`] is the record shape callers supply (and the JSON shape the
//! serialized form uses). A [`Tree`](crate::Tree) deep-copies it into
//! [`Node`]s, whose children live in exactly one [`Children`] slot. Folding
//! and expanding move the same `Vec` between slots, so a node can never lose
//! its children.
//!
//! Traversals are recursive and bounded by the depth of the input. JSON input
//! is additionally capped by `serde_json`'s nesting limit.

use serde::{Deserialize, Serialize};

/// A node as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeData {
    /// Display label.
    pub text: String,
    /// Link target, matched against the current location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Opaque tags, passed through to rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Child nodes. `None` and an empty list both denote a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<NodeData>>,
}

impl NodeData {
    /// Create a leaf with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the link target.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Append a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: NodeData) -> Self {
        self.nodes.get_or_insert_with(Vec::new).push(child);
        self
    }
}

/// The slot holding a node's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// No children.
    Leaf,
    /// Children are shown in the rendered rows.
    Expanded(Vec<Node>),
    /// Children are retained but withheld from the rendered rows.
    Folded(Vec<Node>),
}

impl Children {
    /// Children in either slot.
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Leaf => &[],
            Self::Expanded(nodes) | Self::Folded(nodes) => nodes,
        }
    }

    /// Children that are currently shown.
    pub fn visible(&self) -> &[Node] {
        match self {
            Self::Expanded(nodes) => nodes,
            Self::Leaf | Self::Folded(_) => &[],
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        match self {
            Self::Leaf => &mut [],
            Self::Expanded(nodes) | Self::Folded(nodes) => nodes,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    pub fn is_folded(&self) -> bool {
        matches!(self, Self::Folded(_))
    }
}

/// A node owned by a [`Tree`](crate::Tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    text: String,
    href: Option<String>,
    tags: Vec<String>,
    children: Children,
}

impl Node {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }

    /// Swap the children between the expanded and folded slot.
    ///
    /// Returns `false` for a leaf, which is left untouched.
    pub(crate) fn toggle(&mut self) -> bool {
        self.children = match std::mem::replace(&mut self.children, Children::Leaf) {
            Children::Leaf => return false,
            Children::Expanded(nodes) => Children::Folded(nodes),
            Children::Folded(nodes) => Children::Expanded(nodes),
        };
        true
    }

    /// Fold the node if it is currently expanded.
    pub(crate) fn fold(&mut self) -> bool {
        self.children.is_expanded() && self.toggle()
    }

    /// Convert back into the caller-facing record, whatever the fold state.
    pub fn to_data(&self) -> NodeData {
        NodeData {
            text: self.text.clone(),
            href: self.href.clone(),
            tags: self.tags.clone(),
            nodes: (!self.children.is_leaf())
                .then(|| self.children.nodes().iter().map(Node::to_data).collect()),
        }
    }
}

impl From<&NodeData> for Node {
    fn from(data: &NodeData) -> Self {
        let children = match data.nodes.as_deref() {
            Some(nodes) if !nodes.is_empty() => {
                Children::Expanded(nodes.iter().map(Node::from).collect())
            }
            _ => Children::Leaf,
        };
        Self {
            text: data.text.clone(),
            href: data.href.clone(),
            tags: data.tags.clone(),
            children,
        }
    }
}

/// Index path from the forest root to a node.
///
/// Nodes are never added, removed or reordered after construction, so a path
/// identifies the same node for the lifetime of the model.
pub(crate) type NodePath = Vec<usize>;

/// Resolve a path to a node.
pub(crate) fn node_at<'a>(forest: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get(*first)?;
    for &index in rest {
        node = node.children.nodes().get(index)?;
    }
    Some(node)
}

/// Resolve a path to a node, mutably.
pub(crate) fn node_at_mut<'a>(forest: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get_mut(*first)?;
    for &index in rest {
        node = node.children.nodes_mut().get_mut(index)?;
    }
    Some(node)
}
