//! Menu configuration.

use serde::Deserialize;

/// Menu-wide flags shared by every node of one menu instance.
///
/// # Example
///
/// ```
/// use navtree::config::MenuConfig;
///
/// let config = MenuConfig::new().show_one_child().collapsed(true);
/// assert!(config.accordion());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Always expand every submenu. Clicks never collapse.
    pub show_child: bool,

    /// Accordion mode: at most one top-level submenu open at a time.
    /// Ignored when `show_child` is set.
    pub show_one_child: bool,

    /// The menu is collapsed to icons only.
    pub is_collapsed: bool,

    /// Right-to-left layout. Not used by resolution.
    pub rtl: bool,
}

impl MenuConfig {
    /// Create a config with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always show children.
    pub fn show_child(mut self) -> Self {
        self.show_child = true;
        self
    }

    /// Enable accordion mode among top-level items.
    pub fn show_one_child(mut self) -> Self {
        self.show_one_child = true;
        self
    }

    /// Set icon-only collapsed mode.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.is_collapsed = collapsed;
        self
    }

    /// Set right-to-left layout.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Whether accordion mode is in effect.
    pub fn accordion(&self) -> bool {
        self.show_one_child && !self.show_child
    }
}
