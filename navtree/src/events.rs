//! Click events and menu notifications.
//!
//! Nodes push [`MenuEvent`]s to the menu's [`EventQueue`] while handling a
//! click. The host drains the queue after each interaction and reacts, for
//! example by closing a mobile drawer.

use std::sync::{Arc, RwLock};

use crate::item::MenuItem;
use crate::node::NodeId;

/// Result of handling a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// No expansion state changed.
    Ignored,
    /// Expansion state changed.
    Consumed,
}

impl EventResult {
    /// Check if the click changed expansion state.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// The interaction that triggered a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Column of the pointer, if the click came from a pointer.
    pub x: Option<u16>,
    /// Row of the pointer, if the click came from a pointer.
    pub y: Option<u16>,
    default_prevented: bool,
}

impl ClickEvent {
    /// A click without pointer coordinates (keyboard activation).
    pub fn new() -> Self {
        Self::default()
    }

    /// A pointer click at the given position.
    pub fn at(x: u16, y: u16) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            default_prevented: false,
        }
    }

    /// Suppress the default action (following the link).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was suppressed.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Notifications emitted by menu nodes.
#[derive(Debug, Clone)]
pub enum MenuEvent {
    /// An item was clicked. Carries the event as it stood after the
    /// node handled it.
    ItemClick {
        /// The clicked node.
        node: NodeId,
        /// The interaction.
        event: ClickEvent,
        /// The clicked item.
        item: MenuItem,
    },
    /// A top-level item was clicked while the menu is collapsed.
    ///
    /// The collapsed popup uses this to cancel its close timer when the
    /// item has a submenu.
    TouchClickItem {
        /// Whether the clicked item has children.
        clear_close_timeout: bool,
    },
}

/// Shared queue of pending menu events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Arc<RwLock<Vec<MenuEvent>>>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event to the queue.
    pub fn push(&self, event: MenuEvent) {
        if let Ok(mut pending) = self.pending.write() {
            pending.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<MenuEvent> {
        self.pending
            .write()
            .ok()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.pending.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Check if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
