//! Single-open coordination among top-level submenus.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::node::NodeId;

/// Tracks which top-level node is open in accordion mode.
///
/// One coordinator belongs to one menu instance and is handed to every node
/// when it is built. Clones share state. The open identity is only ever
/// changed through [`announce_open`](Self::announce_open) and
/// [`announce_closed`](Self::announce_closed), so at most one node can be
/// open at a time.
#[derive(Debug, Clone, Default)]
pub struct AccordionCoordinator {
    open: Arc<RwLock<Option<NodeId>>>,
    dirty: Arc<AtomicBool>,
}

impl AccordionCoordinator {
    /// Create a coordinator with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the open node, closing whichever was open before.
    pub fn announce_open(&self, id: NodeId) {
        if let Ok(mut guard) = self.open.write() {
            log::debug!("Accordion open: {:?} -> {}", *guard, id);
            *guard = Some(id);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the accordion.
    pub fn announce_closed(&self) {
        if let Ok(mut guard) = self.open.write() {
            log::debug!("Accordion closed (was {:?})", *guard);
            *guard = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The currently open node, if any.
    pub fn current_open(&self) -> Option<NodeId> {
        self.open
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Whether `id` is the open node.
    pub fn is_open(&self, id: NodeId) -> bool {
        self.current_open() == Some(id)
    }

    /// Check if the open node changed since the last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_previous() {
        let accordion = AccordionCoordinator::new();
        let (a, b) = (NodeId::new(), NodeId::new());

        accordion.announce_open(a);
        accordion.announce_open(b);
        assert!(accordion.is_open(b));
        assert!(!accordion.is_open(a));

        accordion.announce_closed();
        assert_eq!(accordion.current_open(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let accordion = AccordionCoordinator::new();
        let handle = accordion.clone();
        let id = NodeId::new();

        handle.announce_open(id);
        assert!(accordion.is_open(id));
        assert!(accordion.is_dirty());
        accordion.clear_dirty();
        assert!(!handle.is_dirty());
    }
}
