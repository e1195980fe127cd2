//! Tree-node state engine for collapsible list-style tree controls.
//!
//! The crate keeps the node model, fold state and selection of one tree, and
//! flattens it into an ordered list of [`Row`]s for an external renderer to
//! draw. Interactions come back as a row id plus an [`Action`]:
//!
//! - [`Action::Toggle`] swaps a node between expanded and folded
//! - [`Action::Select`] selects a node, or deselects it when already selected
//!
//! Every interaction ends in a full re-render; row ids are only valid until
//! the next one.
//!
//! Initial fold state comes from [`TreeOptions::levels`]: nodes shallower
//! than `levels` start expanded. With [`TreeOptions::expand_active_tree`],
//! nodes whose subtree links to [`TreeOptions::location`] stay expanded too.

mod active;
mod error;
mod events;
mod flatten;
mod node;
mod options;
mod planner;
mod selection;
mod tree;

pub use active::{is_active, on_active_path};
pub use error::TreeError;
pub use events::{Action, Outcome, TreeEvent};
pub use flatten::{Affordance, Row};
pub use node::{Children, Node, NodeData};
pub use options::TreeOptions;
pub use tree::Tree;
