//! Interactions coming in and events going out.

use std::str::FromStr;

use crate::error::TreeError;
use crate::node::Node;

/// What an interaction on a row asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The expand/collapse affordance was hit.
    Toggle,
    /// Anywhere else on the row was hit.
    Select,
}

impl FromStr for Action {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(Self::Toggle),
            "select" => Ok(Self::Select),
            other => Err(TreeError::InvalidMethod(other.to_string())),
        }
    }
}

/// Events emitted to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A node became selected. Carries a copy detached from the tree.
    NodeSelected(Node),
    /// The rows were recomputed and should be redrawn.
    Rendered { rows: usize },
}

/// What the host should do with an interaction after it was handled.
///
/// A failed interaction has no outcome of its own; use
/// [`Tree::fallback_outcome`](crate::Tree::fallback_outcome) instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Suppress the host's default handling (link navigation).
    pub prevent_default: bool,
    /// Link to follow, for a select on a linked node with links enabled.
    pub follow_link: Option<String>,
}

pub(crate) type Listener = Box<dyn FnMut(&TreeEvent)>;
