//! Behavioral core of a hierarchical navigation menu.
//!
//! Decides for every entry of a menu tree whether it is active, whether a
//! descendant is active, and whether its submenu is shown, with an optional
//! accordion mode that keeps at most one top-level submenu open.

pub mod accordion;
pub mod animation;
pub mod config;
pub mod error;
pub mod events;
pub mod item;
pub mod location;
pub mod menu;
pub mod node;
pub mod resolve;

pub use menu::SidebarMenu;

pub mod prelude {
    pub use crate::accordion::AccordionCoordinator;
    pub use crate::animation::{ElementBox, ExpandTarget, Extent, HeightAnimator};
    pub use crate::config::MenuConfig;
    pub use crate::error::MenuError;
    pub use crate::events::{ClickEvent, EventResult, MenuEvent};
    pub use crate::item::{Alias, MenuDocument, MenuItem, load_document, load_menu, parse_document, parse_menu};
    pub use crate::location::{NavigationMode, Navigator};
    pub use crate::menu::{FlatNode, SidebarMenu};
    pub use crate::node::{MenuNode, NodeId, NodeState};
    pub use crate::resolve::{resolve_active, resolve_child_active};
}
