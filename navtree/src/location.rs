//! Location matching and the location oracle.
//!
//! Matching is a plain suffix comparison: a menu target matches when the
//! current location ends with it. This tolerates locale or base-path
//! prefixes on the location while targets stay relative. It also means
//! `/admin/home` matches a target of `/home`; callers that need segment
//! aware matching must normalize their targets accordingly.
//!
//! [`Navigator`] is the oracle the menu reads the current location from.
//! It notifies subscribers synchronously on every navigation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::item::Alias;

/// Check whether `current` ends with `target`.
///
/// No normalization of trailing slashes or case is performed.
pub fn matches(current: &str, target: &str) -> bool {
    current.ends_with(target)
}

/// Check whether any alias suffix-matches `current`.
///
/// An absent, empty, or malformed alias never matches.
pub fn alias_matches(current: &str, alias: Option<&Alias>) -> bool {
    match alias {
        Some(Alias::One(path)) => matches(current, path),
        Some(Alias::Many(paths)) => paths.iter().any(|path| matches(current, path)),
        Some(Alias::Invalid(_)) | None => false,
    }
}

/// Where the navigator's location string comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// A router reports the full path of the current route.
    #[default]
    Router,
    /// No router: the full document location, updated on hash changes.
    Hash,
}

/// Handle returned by [`Navigator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

struct NavigatorInner {
    mode: NavigationMode,
    location: Option<String>,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Shared location oracle with change notification.
///
/// Clones share the same location and listener list.
///
/// # Example
///
/// ```
/// use navtree::location::Navigator;
///
/// let nav = Navigator::router("/home");
/// let id = nav.subscribe(|path| println!("now at {path}"));
/// nav.navigate("/docs/intro");
/// assert_eq!(nav.current().as_deref(), Some("/docs/intro"));
/// nav.unsubscribe(id);
/// ```
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<RwLock<NavigatorInner>>,
}

impl Navigator {
    fn with_mode(mode: NavigationMode, location: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NavigatorInner {
                mode,
                location,
                listeners: Vec::new(),
            })),
        }
    }

    /// Create a router-backed navigator at the given full path.
    pub fn router(path: impl Into<String>) -> Self {
        Self::with_mode(NavigationMode::Router, Some(path.into()))
    }

    /// Create a navigator fed by the document location (no router).
    pub fn hash(href: impl Into<String>) -> Self {
        Self::with_mode(NavigationMode::Hash, Some(href.into()))
    }

    /// Create a navigator that has not reported any location yet.
    pub fn unresolved(mode: NavigationMode) -> Self {
        Self::with_mode(mode, None)
    }

    /// Get the navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.inner
            .read()
            .map(|guard| guard.mode)
            .unwrap_or_default()
    }

    /// Whether a router drives this navigator.
    pub fn is_router(&self) -> bool {
        self.mode() == NavigationMode::Router
    }

    /// Get the current location, if one has been reported.
    pub fn current(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.location.clone())
    }

    /// Move to a new location and notify every listener.
    ///
    /// Listeners run in subscription order after the internal lock is
    /// released, so they may read the navigator freely.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        let listeners: Vec<Listener> = match self.inner.write() {
            Ok(mut guard) => {
                guard.location = Some(path.clone());
                guard
                    .listeners
                    .iter()
                    .map(|(_, listener)| Arc::clone(listener))
                    .collect()
            }
            Err(_) => {
                log::warn!("Navigator lock poisoned, dropping navigation to {}", path);
                return;
            }
        };

        log::debug!(
            "Navigated to {} ({} listeners)",
            path,
            listeners.len()
        );
        for listener in listeners {
            listener(&path);
        }
    }

    /// Register a change listener.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = ListenerId::new();
        if let Ok(mut guard) = self.inner.write() {
            guard.listeners.push((id, Arc::new(listener)));
        }
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let before = guard.listeners.len();
        guard.listeners.retain(|(listener_id, _)| *listener_id != id);
        guard.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Navigator");
        if let Ok(guard) = self.inner.read() {
            s.field("mode", &guard.mode)
                .field("location", &guard.location)
                .field("listeners", &guard.listeners.len());
        }
        s.finish()
    }
}
