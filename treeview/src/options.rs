//! Tree configuration.

use serde::Deserialize;

use crate::error::TreeError;

/// Options recognized by a [`Tree`](crate::Tree).
///
/// Unspecified keys fall back to their defaults when loaded from JSON, so
/// `{"levels": 2}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOptions {
    /// Depth up to which nodes start expanded. `1` shows only root nodes.
    pub levels: u32,

    /// Style identifier for the affordance of a folded node.
    pub expand_icon: String,

    /// Style identifier for the affordance of an expanded node.
    pub collapse_icon: String,

    /// Let selection clicks on linked nodes fall through to navigation.
    pub enable_links: bool,

    /// Render node tags. No effect on state.
    pub show_tags: bool,

    /// Keep nodes on the active path expanded regardless of `levels`.
    pub expand_active_tree: bool,

    /// The current location that node hrefs are matched against.
    pub location: Option<String>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            levels: 1,
            expand_icon: "glyphicon glyphicon-chevron-right".to_string(),
            collapse_icon: "glyphicon glyphicon-chevron-down".to_string(),
            enable_links: false,
            show_tags: false,
            expand_active_tree: true,
            location: None,
        }
    }
}

impl TreeOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the initial expansion depth.
    pub fn levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Set the expand and collapse icon identifiers.
    pub fn icons(mut self, expand: impl Into<String>, collapse: impl Into<String>) -> Self {
        self.expand_icon = expand.into();
        self.collapse_icon = collapse.into();
        self
    }

    /// Allow link navigation on select.
    pub fn enable_links(mut self, enable: bool) -> Self {
        self.enable_links = enable;
        self
    }

    /// Show node tags.
    pub fn show_tags(mut self, show: bool) -> Self {
        self.show_tags = show;
        self
    }

    /// Enable or disable the active path exemption.
    pub fn expand_active_tree(mut self, expand: bool) -> Self {
        self.expand_active_tree = expand;
        self
    }

    /// Set the current location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Effective expansion depth; anything below one behaves as one.
    pub(crate) fn effective_levels(&self) -> u32 {
        self.levels.max(1)
    }
}
