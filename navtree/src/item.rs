//! Menu item data model.
//!
//! Items are read-only input: the caller owns the tree and the menu only
//! ever borrows or clones it. Trees are usually loaded from JSON:
//!
//! ```json
//! [
//!   { "href": "/home", "title": "Home" },
//!   { "href": "/docs", "title": "Docs", "alias": ["/manual"],
//!     "child": [ { "href": "/docs/intro", "title": "Intro" } ] }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::config::MenuConfig;
use crate::error::MenuError;

/// Additional path(s) that count as a match for an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Alias {
    /// A single alias path.
    One(String),
    /// Any of several alias paths.
    Many(Vec<String>),
    /// Any other shape. Never matches.
    Invalid(IgnoredAny),
}

impl From<&str> for Alias {
    fn from(path: &str) -> Self {
        Alias::One(path.to_string())
    }
}

impl From<Vec<&str>> for Alias {
    fn from(paths: Vec<&str>) -> Self {
        Alias::Many(paths.into_iter().map(str::to_string).collect())
    }
}

/// A single entry in the menu tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Link target, relative to the location.
    pub href: Option<String>,
    /// Extra targets that also make this item active.
    pub alias: Option<Alias>,
    /// Submenu entries.
    pub child: Option<Vec<MenuItem>>,
    /// Disabled items still resolve but ignore clicks.
    pub disabled: bool,
    /// Display title. Not used by resolution.
    pub title: Option<String>,
    /// Icon name. Not used by resolution.
    pub icon: Option<String>,
}

impl MenuItem {
    /// Create an item linking to `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    /// Create an item without a link target (a header or separator).
    pub fn header(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the alias path(s).
    pub fn alias(mut self, alias: impl Into<Alias>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the submenu entries.
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.child = Some(children);
        self
    }

    /// Mark the item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Submenu entries, empty if none.
    pub fn child_items(&self) -> &[MenuItem] {
        self.child.as_deref().unwrap_or(&[])
    }

    /// Whether this item carries a `child` list.
    ///
    /// An explicitly empty list still counts, matching how the item is
    /// rendered as a submenu header.
    pub fn has_children(&self) -> bool {
        self.child.is_some()
    }
}

/// A menu definition file: flags plus the item tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuDocument {
    /// Menu-wide flags.
    pub config: MenuConfig,
    /// Top-level items.
    pub menu: Vec<MenuItem>,
}

/// Parse a JSON array of menu items.
pub fn parse_menu(json: &str) -> Result<Vec<MenuItem>, MenuError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of menu items from a file.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Vec<MenuItem>, MenuError> {
    parse_menu(&read(path.as_ref())?)
}

/// Load a [`MenuDocument`] from a file.
///
/// A bare array of items is accepted too and gets the default config.
pub fn load_document(path: impl AsRef<Path>) -> Result<MenuDocument, MenuError> {
    parse_document(&read(path.as_ref())?)
}

/// Parse a [`MenuDocument`], or a bare item array.
///
/// The top-level JSON shape decides which one is expected, so a malformed
/// item array is reported instead of being read as an empty document.
pub fn parse_document(json: &str) -> Result<MenuDocument, MenuError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let document = if value.is_array() {
        MenuDocument {
            config: MenuConfig::default(),
            menu: serde_json::from_value(value)?,
        }
    } else {
        serde_json::from_value(value)?
    };
    Ok(document)
}

fn read(path: &Path) -> Result<String, MenuError> {
    fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })
}
