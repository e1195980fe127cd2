//! Error types for the tree engine.

use thiserror::Error;

/// Errors reported by [`Tree`](crate::Tree) operations.
///
/// None of these leave the node model partially mutated: a failed call
/// behaves as if it was never made.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Serialized construction input could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A row id did not resolve to a node in the most recent render.
    #[error("node does not exist: row {row_id}")]
    NodeNotFound { row_id: usize },

    /// An interaction asked for an operation the tree does not expose.
    #[error("no such method: {0}")]
    InvalidMethod(String),

    /// The tree was torn down with [`Tree::remove`](crate::Tree::remove).
    #[error("not initialized, can not call method")]
    NotInitialized,
}
