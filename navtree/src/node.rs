//! Per-node activation and expansion state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::accordion::AccordionCoordinator;
use crate::config::MenuConfig;
use crate::events::{ClickEvent, EventQueue, EventResult, MenuEvent};
use crate::item::MenuItem;
use crate::location::Navigator;
use crate::resolve::{resolve_active, resolve_child_active};

/// Unique identifier for a menu node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__menu_node_{}", self.0)
    }
}

/// Everything a node receives from its menu when it is built.
#[derive(Debug, Clone, Default)]
pub struct NodeContext {
    /// Menu-wide flags.
    pub config: MenuConfig,
    /// The menu's accordion state.
    pub accordion: AccordionCoordinator,
    /// Where click notifications go.
    pub events: EventQueue,
    /// The location oracle. Without one nothing is ever active.
    pub navigator: Option<Navigator>,
}

impl NodeContext {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Attach a location oracle.
    pub fn with_navigator(mut self, navigator: Navigator) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// The current location, if there is an oracle that reported one.
    pub fn location(&self) -> Option<String> {
        self.navigator.as_ref().and_then(Navigator::current)
    }
}

/// Snapshot of a node's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    pub identity: NodeId,
    pub active: bool,
    pub child_active: bool,
    pub expanded: bool,
}

#[derive(Debug, Default)]
struct NodeInner {
    active: bool,
    child_active: bool,
    expanded: bool,
}

/// A rendered menu entry with its activation and expansion state.
///
/// Nodes are built once per item, top-down, and recomputed on every
/// location change. Clones share state.
///
/// Top-level nodes in accordion mode do not track their own expansion;
/// their visibility is read from the menu's [`AccordionCoordinator`].
#[derive(Debug, Clone)]
pub struct MenuNode {
    id: NodeId,
    item: Arc<MenuItem>,
    depth: u16,
    children: Vec<MenuNode>,
    cx: NodeContext,
    inner: Arc<RwLock<NodeInner>>,
    dirty: Arc<AtomicBool>,
}

impl MenuNode {
    /// Build a node and its whole subtree.
    ///
    /// Resolves against the context's current location. An accordion
    /// governed node that starts out active, or with an active descendant,
    /// announces itself open.
    pub fn new(item: MenuItem, depth: u16, cx: &NodeContext) -> Self {
        let location = cx.location();
        let location = location.as_deref();

        let children = item
            .child_items()
            .iter()
            .map(|child| MenuNode::new(child.clone(), depth + 1, cx))
            .collect();

        let active = resolve_active(&item, location);
        let child_active = item.has_children() && resolve_child_active(item.child_items(), location);
        let expanded = item.has_children() && (cx.config.show_child || active || child_active);

        let node = Self {
            id: NodeId::new(),
            item: Arc::new(item),
            depth,
            children,
            cx: cx.clone(),
            inner: Arc::new(RwLock::new(NodeInner {
                active,
                child_active,
                expanded,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        };

        if node.has_children() && node.is_accordion_governed() && (active || child_active) {
            node.cx.accordion.announce_open(node.id);
        }

        log::trace!(
            "Built {} at depth {} (active={}, child_active={})",
            node.id,
            depth,
            active,
            child_active
        );
        node
    }

    /// Get the unique ID for this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The item this node renders.
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Depth in the tree (0 = top level).
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Child nodes.
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        self.item.has_children()
    }

    /// Whether this is a top-level node.
    pub fn is_first_item(&self) -> bool {
        self.depth == 0
    }

    /// Whether the accordion, not this node, decides visibility.
    pub fn is_accordion_governed(&self) -> bool {
        self.is_first_item() && self.cx.config.accordion()
    }

    /// Whether clicking follows a router link.
    pub fn is_router_link(&self) -> bool {
        self.item.href.is_some()
            && self
                .cx
                .navigator
                .as_ref()
                .is_some_and(Navigator::is_router)
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn is_active(&self) -> bool {
        self.inner.read().map(|g| g.active).unwrap_or(false)
    }

    pub fn is_child_active(&self) -> bool {
        self.inner.read().map(|g| g.child_active).unwrap_or(false)
    }

    /// The node's own expansion flag.
    ///
    /// Not meaningful for accordion governed nodes; use [`show`](Self::show).
    pub fn is_expanded(&self) -> bool {
        self.inner.read().map(|g| g.expanded).unwrap_or(false)
    }

    /// Whether the submenu is rendered.
    pub fn show(&self) -> bool {
        if !self.has_children() {
            return false;
        }
        if self.cx.config.show_child {
            return true;
        }
        if self.is_accordion_governed() {
            self.cx.accordion.is_open(self.id)
        } else {
            self.is_expanded()
        }
    }

    /// Snapshot of the node's state.
    pub fn state(&self) -> NodeState {
        let (active, child_active, expanded) = self
            .inner
            .read()
            .map(|g| (g.active, g.child_active, g.expanded))
            .unwrap_or_default();
        NodeState {
            identity: self.id,
            active,
            child_active,
            expanded,
        }
    }

    /// Find a node by ID in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Recompute activation for this subtree.
    ///
    /// A node that becomes active or child-active is forced open unless the
    /// accordion governs it or every submenu is always shown. A node that
    /// already was stays as the user left it.
    pub fn on_location_change(&self, location: Option<&str>) {
        let active = resolve_active(&self.item, location);
        let child_active =
            self.has_children() && resolve_child_active(self.item.child_items(), location);
        let may_force_open = self.has_children()
            && !self.is_accordion_governed()
            && !self.cx.config.show_child;

        if let Ok(mut guard) = self.inner.write() {
            let was_on_path = guard.active || guard.child_active;
            let force_open = may_force_open && !was_on_path && (active || child_active);
            let expanded = guard.expanded || force_open;
            if guard.active != active
                || guard.child_active != child_active
                || guard.expanded != expanded
            {
                guard.active = active;
                guard.child_active = child_active;
                guard.expanded = expanded;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }

        for child in &self.children {
            child.on_location_change(location);
        }
    }

    /// Handle a click on this node's header.
    ///
    /// `mobile_item` is set when the click comes from the popup shown for a
    /// collapsed menu rather than from the item itself. An
    /// [`MenuEvent::ItemClick`] is always queued.
    pub fn click(&self, event: &mut ClickEvent, mobile_item: bool) -> EventResult {
        let mut touch = None;
        let result = self.apply_click(event, mobile_item, &mut touch);

        self.cx.events.push(MenuEvent::ItemClick {
            node: self.id,
            event: event.clone(),
            item: (*self.item).clone(),
        });
        if let Some(clear_close_timeout) = touch {
            self.cx
                .events
                .push(MenuEvent::TouchClickItem { clear_close_timeout });
        }
        result
    }

    fn apply_click(
        &self,
        event: &mut ClickEvent,
        mobile_item: bool,
        touch: &mut Option<bool>,
    ) -> EventResult {
        let has_children = self.has_children();

        if self.item.disabled || (self.item.href.is_none() && (!has_children || mobile_item)) {
            event.prevent_default();
            return EventResult::Ignored;
        }

        if !mobile_item && self.cx.config.is_collapsed && self.is_first_item() {
            *touch = Some(has_children);
        }

        if mobile_item || !has_children {
            return EventResult::Ignored;
        }

        let governed = self.is_accordion_governed();

        // Navigation will activate it; only the accordion reacts now.
        if self.is_router_link() && !self.is_active() {
            if governed {
                self.cx.accordion.announce_open(self.id);
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        if governed {
            if self.item.href.is_none() {
                event.prevent_default();
            }
            if self.cx.accordion.is_open(self.id) {
                self.cx.accordion.announce_closed();
            } else {
                self.cx.accordion.announce_open(self.id);
            }
            return EventResult::Consumed;
        }

        if self.cx.config.show_child {
            return EventResult::Ignored;
        }

        self.toggle();
        EventResult::Consumed
    }

    /// Flip the node's own expansion flag.
    pub fn toggle(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.expanded = !guard.expanded;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the node state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
