//! The root of a menu instance.

use crate::accordion::AccordionCoordinator;
use crate::animation::HeightAnimator;
use crate::config::MenuConfig;
use crate::events::{ClickEvent, EventResult, MenuEvent};
use crate::item::MenuItem;
use crate::location::{ListenerId, Navigator};
use crate::node::{MenuNode, NodeContext, NodeId};

/// A visible node in the flattened menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    /// The node's ID.
    pub id: NodeId,
    /// Depth in the tree (0 = top level).
    pub depth: u16,
    /// Display title.
    pub title: Option<String>,
    /// Link target.
    pub href: Option<String>,
    /// Whether the node has a submenu.
    pub has_children: bool,
    /// Whether the node matches the location.
    pub active: bool,
    /// Whether a descendant matches the location.
    pub child_active: bool,
    /// Whether the submenu is shown.
    pub show: bool,
    /// Whether clicks are ignored.
    pub disabled: bool,
}

/// A sidebar menu built from a tree of items.
///
/// The menu owns the state shared by all of its nodes: one
/// [`AccordionCoordinator`], one event queue, and a subscription to the
/// [`Navigator`] that recomputes every node synchronously on navigation.
/// Dropping the menu removes the subscription.
///
/// # Example
///
/// ```
/// use navtree::prelude::*;
///
/// let nav = Navigator::router("/docs/intro");
/// let menu = SidebarMenu::with_navigator(
///     vec![
///         MenuItem::link("/home"),
///         MenuItem::link("/docs").children(vec![MenuItem::link("/docs/intro")]),
///     ],
///     MenuConfig::new().show_one_child(),
///     nav,
/// );
///
/// let docs = &menu.nodes()[1];
/// assert!(docs.is_child_active());
/// assert!(docs.show());
/// assert!(!menu.nodes()[0].show());
/// ```
#[derive(Debug)]
pub struct SidebarMenu {
    nodes: Vec<MenuNode>,
    cx: NodeContext,
    listener: Option<ListenerId>,
}

impl SidebarMenu {
    /// Build a menu with no location oracle. Nothing is ever active.
    pub fn new(items: Vec<MenuItem>, config: MenuConfig) -> Self {
        Self::build(items, NodeContext::new(config))
    }

    /// Build a menu that follows `navigator`.
    pub fn with_navigator(items: Vec<MenuItem>, config: MenuConfig, navigator: Navigator) -> Self {
        let mut menu = Self::build(items, NodeContext::new(config).with_navigator(navigator.clone()));

        let nodes = menu.nodes.clone();
        menu.listener = Some(navigator.subscribe(move |location| {
            log::debug!("Location changed to {}, recomputing menu", location);
            for node in &nodes {
                node.on_location_change(Some(location));
            }
        }));
        menu
    }

    fn build(items: Vec<MenuItem>, cx: NodeContext) -> Self {
        let nodes = items
            .into_iter()
            .map(|item| MenuNode::new(item, 0, &cx))
            .collect();
        Self {
            nodes,
            cx,
            listener: None,
        }
    }

    /// Top-level nodes.
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Menu-wide flags.
    pub fn config(&self) -> MenuConfig {
        self.cx.config
    }

    /// The menu's accordion state.
    pub fn accordion(&self) -> &AccordionCoordinator {
        &self.cx.accordion
    }

    /// The location oracle, if any.
    pub fn navigator(&self) -> Option<&Navigator> {
        self.cx.navigator.as_ref()
    }

    /// Height hooks for this menu's submenus.
    pub fn animator(&self) -> HeightAnimator {
        HeightAnimator::new(self.cx.config.is_collapsed)
    }

    /// Find a node by ID anywhere in the menu.
    pub fn find(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Find a node by its index path, e.g. `[1, 0]` for the first child of
    /// the second top-level node.
    pub fn node_at(&self, path: &[usize]) -> Option<&MenuNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    /// Whether the node's submenu is shown. False for unknown IDs.
    pub fn show(&self, id: NodeId) -> bool {
        self.find(id).is_some_and(MenuNode::show)
    }

    /// Click a node. Returns `None` for unknown IDs.
    pub fn click(&self, id: NodeId, event: &mut ClickEvent, mobile_item: bool) -> Option<EventResult> {
        self.find(id).map(|node| node.click(event, mobile_item))
    }

    /// Recompute every node against the navigator's current location.
    ///
    /// Navigation through the navigator already does this; call it after
    /// the location changed behind the navigator's back.
    pub fn refresh(&self) {
        let location = self.cx.location();
        for node in &self.nodes {
            node.on_location_change(location.as_deref());
        }
    }

    /// Drain pending click notifications.
    pub fn drain_events(&self) -> Vec<MenuEvent> {
        self.cx.events.drain()
    }

    /// Flatten the nodes a renderer would draw: every node whose ancestors
    /// all show their submenu.
    pub fn visible(&self) -> Vec<FlatNode> {
        let mut out = Vec::new();
        Self::collect_visible(&self.nodes, &mut out);
        out
    }

    fn collect_visible(nodes: &[MenuNode], out: &mut Vec<FlatNode>) {
        for node in nodes {
            let state = node.state();
            let show = node.show();
            let item = node.item();

            out.push(FlatNode {
                id: node.id(),
                depth: node.depth(),
                title: item.title.clone(),
                href: item.href.clone(),
                has_children: node.has_children(),
                active: state.active,
                child_active: state.child_active,
                show,
                disabled: item.disabled,
            });

            if show {
                Self::collect_visible(node.children(), out);
            }
        }
    }

    /// Stop following the navigator.
    pub fn detach(&mut self) {
        if let (Some(id), Some(navigator)) = (self.listener.take(), &self.cx.navigator) {
            navigator.unsubscribe(id);
        }
    }
}

impl Drop for SidebarMenu {
    fn drop(&mut self) {
        self.detach();
    }
}
