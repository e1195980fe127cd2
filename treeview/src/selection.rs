//! Single-node selection.

use crate::node::NodePath;

/// Result of a [`Selection::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionChange {
    /// The node became the selected node, replacing any previous one.
    Selected,
    /// The node was already selected and the selection is now empty.
    Cleared,
}

/// Tracks the one selected node, by path.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    selected: Option<NodePath>,
}

impl Selection {
    /// Select `path`, or clear the selection if it is already selected.
    pub(crate) fn select(&mut self, path: NodePath) -> SelectionChange {
        if self.selected.as_ref() == Some(&path) {
            self.selected = None;
            SelectionChange::Cleared
        } else {
            self.selected = Some(path);
            SelectionChange::Selected
        }
    }

    pub(crate) fn is_selected(&self, path: &[usize]) -> bool {
        self.selected.as_deref() == Some(path)
    }

    pub(crate) fn selected(&self) -> Option<&[usize]> {
        self.selected.as_deref()
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }
}
