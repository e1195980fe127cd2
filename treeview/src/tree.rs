//! Tree state and interaction dispatch.

use std::fmt;

use crate::error::TreeError;
use crate::events::{Action, Listener, Outcome, TreeEvent};
use crate::flatten::{Row, flatten};
use crate::node::{Node, NodeData, NodePath, node_at, node_at_mut};
use crate::options::TreeOptions;
use crate::planner;
use crate::selection::{Selection, SelectionChange};

/// A collapsible tree with single selection.
///
/// The tree owns its nodes. Callers read the current [`Row`]s, feed
/// interactions back by row id through [`Tree::handle`], and observe
/// selection and redraw events through [`Tree::subscribe`].
///
/// # Example
///
/// ```
/// use treeview::{Action, NodeData, Tree, TreeOptions};
///
/// let data = vec![
///     NodeData::new("Parent").child(NodeData::new("Child")),
///     NodeData::new("Sibling"),
/// ];
/// let mut tree = Tree::new(&data, TreeOptions::new().levels(1));
/// assert_eq!(tree.rows().len(), 2);
///
/// tree.handle(0, Action::Toggle).unwrap();
/// assert_eq!(tree.rows().len(), 3);
/// ```
pub struct Tree {
    forest: Vec<Node>,
    options: TreeOptions,
    selection: Selection,
    /// Rows of the most recent render.
    rows: Vec<Row>,
    listeners: Vec<Listener>,
    initialized: bool,
}

impl Tree {
    /// Build a tree from `nodes`, which are copied.
    pub fn new(nodes: &[NodeData], options: TreeOptions) -> Self {
        let mut tree = Self {
            forest: Vec::new(),
            options: TreeOptions::default(),
            selection: Selection::default(),
            rows: Vec::new(),
            listeners: Vec::new(),
            initialized: false,
        };
        tree.reset(nodes, options);
        tree
    }

    /// Build a tree from a JSON array of nodes.
    pub fn from_json(json: &str, options: TreeOptions) -> Result<Self, TreeError> {
        let nodes = parse_nodes(json)?;
        Ok(Self::new(&nodes, options))
    }

    /// Replace the whole model with `nodes` and re-plan initial expansion.
    ///
    /// Selection is cleared; subscribers are kept.
    pub fn reset(&mut self, nodes: &[NodeData], options: TreeOptions) {
        let mut forest: Vec<Node> = nodes.iter().map(Node::from).collect();
        planner::plan(&mut forest, &options);

        self.forest = forest;
        self.options = options;
        self.selection.clear();
        self.initialized = true;
        log::debug!("[treeview] initialized with {} root nodes", self.forest.len());
        self.render();
    }

    /// Like [`Tree::reset`], from JSON. On a parse error the tree is unchanged.
    pub fn reset_json(&mut self, json: &str, options: TreeOptions) -> Result<(), TreeError> {
        let nodes = parse_nodes(json)?;
        self.reset(&nodes, options);
        Ok(())
    }

    /// Register a listener for [`TreeEvent`]s.
    pub fn subscribe(&mut self, listener: impl FnMut(&TreeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Rows of the most recent render.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row_id: usize) -> Option<&Row> {
        self.rows.get(row_id)
    }

    /// The node behind a row of the most recent render.
    pub fn node(&self, row_id: usize) -> Option<&Node> {
        self.rows
            .get(row_id)
            .and_then(|row| node_at(&self.forest, &row.path))
    }

    /// Root nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.forest
    }

    pub fn selected(&self) -> Option<&Node> {
        self.selection
            .selected()
            .and_then(|path| node_at(&self.forest, path))
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Recompute all rows from the current fold and selection state.
    pub fn render(&mut self) -> &[Row] {
        if !self.initialized {
            return &self.rows;
        }
        self.rows = flatten(&self.forest, &self.selection, &self.options);
        log::debug!("[treeview] rendered {} rows", self.rows.len());

        let rows = self.rows.len();
        self.emit(&TreeEvent::Rendered { rows });
        &self.rows
    }

    /// Change the current location and re-render.
    ///
    /// Only row activity follows the new location; fold state is planned
    /// once, at construction.
    pub fn set_location(&mut self, location: Option<String>) {
        self.options.location = location;
        self.render();
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Apply `action` to the node behind `row_id`, then re-render.
    ///
    /// Errors are logged and leave the tree unchanged. The host should then
    /// act on [`Tree::fallback_outcome`].
    pub fn handle(&mut self, row_id: usize, action: Action) -> Result<Outcome, TreeError> {
        self.dispatch(row_id, action)
            .inspect_err(|e| log::error!("[treeview] {}", e))
    }

    /// Like [`Tree::handle`], with the action named by a string.
    pub fn invoke(&mut self, row_id: usize, method: &str) -> Result<Outcome, TreeError> {
        let action = if self.initialized {
            method.parse::<Action>()
        } else {
            Err(TreeError::NotInitialized)
        };
        let action = action.inspect_err(|e| log::error!("[treeview] {}", e))?;
        self.handle(row_id, action)
    }

    /// Toggle the node behind `row_id`.
    pub fn toggle(&mut self, row_id: usize) -> Result<Outcome, TreeError> {
        self.handle(row_id, Action::Toggle)
    }

    /// Select the node behind `row_id`, or deselect it if already selected.
    pub fn select(&mut self, row_id: usize) -> Result<Outcome, TreeError> {
        self.handle(row_id, Action::Select)
    }

    /// Outcome for an interaction that was not applied.
    ///
    /// Default handling is still prevented unless links are enabled, the
    /// same as for a handled interaction.
    pub fn fallback_outcome(&self) -> Outcome {
        Outcome {
            prevent_default: !self.options.enable_links,
            follow_link: None,
        }
    }

    fn dispatch(&mut self, row_id: usize, action: Action) -> Result<Outcome, TreeError> {
        if !self.initialized {
            return Err(TreeError::NotInitialized);
        }
        let path = self
            .rows
            .get(row_id)
            .map(|row| row.path.clone())
            .ok_or(TreeError::NodeNotFound { row_id })?;
        let mut outcome = self.fallback_outcome();
        let node =
            node_at_mut(&mut self.forest, &path).ok_or(TreeError::NodeNotFound { row_id })?;

        match action {
            Action::Toggle => {
                if node.toggle() {
                    log::debug!("[treeview] toggled '{}'", node.text());
                }
            }
            Action::Select => {
                if self.options.enable_links {
                    outcome.follow_link = node.href().map(str::to_string);
                }
                self.select_path(path);
            }
        }

        self.render();
        Ok(outcome)
    }

    fn select_path(&mut self, path: NodePath) {
        match self.selection.select(path) {
            SelectionChange::Selected => {
                if let Some(node) = self.selected().cloned() {
                    log::debug!("[treeview] selected '{}'", node.text());
                    self.emit(&TreeEvent::NodeSelected(node));
                }
            }
            SelectionChange::Cleared => log::debug!("[treeview] selection cleared"),
        }
    }

    fn emit(&mut self, event: &TreeEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Release all state and subscribers. Safe to call repeatedly.
    pub fn remove(&mut self) {
        if self.initialized {
            self.forest.clear();
            self.rows.clear();
            self.selection.clear();
            self.listeners.clear();
            log::debug!("[treeview] removed");
        }
        self.initialized = false;
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("forest", &self.forest)
            .field("options", &self.options)
            .field("selection", &self.selection)
            .field("rows", &self.rows)
            .field("listeners", &self.listeners.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

fn parse_nodes(json: &str) -> Result<Vec<NodeData>, TreeError> {
    serde_json::from_str(json).map_err(|e| {
        log::error!("[treeview] invalid tree data: {}", e);
        TreeError::Parse(e)
    })
}
