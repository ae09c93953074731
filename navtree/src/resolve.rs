//! Active-state resolution.
//!
//! Both functions are pure: the same item and location always give the
//! same answer, so recomputing on a repeated location is harmless.

use crate::item::MenuItem;
use crate::location::{alias_matches, matches};

/// Whether the item's own target (or an alias) matches the location.
///
/// Items without `href`, or with an empty one, are never active, even if
/// an alias would match. A missing location never matches anything.
pub fn resolve_active(item: &MenuItem, location: Option<&str>) -> bool {
    let (Some(href), Some(location)) = (item.href.as_deref(), location) else {
        return false;
    };
    if href.is_empty() {
        return false;
    }
    matches(location, href) || alias_matches(location, item.alias.as_ref())
}

/// Whether any descendant in `children` is active.
///
/// Depth-first, in sequence order, stopping at the first hit.
pub fn resolve_child_active(children: &[MenuItem], location: Option<&str>) -> bool {
    for child in children {
        if resolve_active(child, location) {
            return true;
        }
        if let Some(grandchildren) = &child.child
            && resolve_child_active(grandchildren, location)
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children() -> Vec<MenuItem> {
        vec![
            MenuItem::link("/x"),
            MenuItem::link("/y").children(vec![MenuItem::link("/z")]),
        ]
    }

    #[test]
    fn test_active_suffix() {
        let item = MenuItem::link("/a/b");
        assert!(resolve_active(&item, Some("https://host/en/a/b")));
        assert!(!resolve_active(&item, Some("/x/a/b/c")));
    }

    #[test]
    fn test_active_via_alias() {
        let item = MenuItem::link("/a").alias(vec!["/legacy", "/old/a"]);
        assert!(resolve_active(&item, Some("/old/a")));
        assert!(!resolve_active(&item, Some("/new")));
    }

    #[test]
    fn test_no_href_never_active() {
        let item = MenuItem::header("Section").alias("/a");
        assert!(!resolve_active(&item, Some("/a")));
    }

    #[test]
    fn test_empty_href_never_active() {
        let item = MenuItem::link("").alias("/a");
        assert!(!resolve_active(&item, Some("/anything")));
        assert!(!resolve_active(&item, Some("/a")));
        assert!(!resolve_child_active(&[item], Some("/anything")));
    }

    #[test]
    fn test_no_location_never_active() {
        assert!(!resolve_active(&MenuItem::link("/a"), None));
        assert!(!resolve_child_active(&children(), None));
    }

    #[test]
    fn test_child_active_nested() {
        assert!(resolve_child_active(&children(), Some("/site/z")));
        assert!(!resolve_child_active(&children(), Some("/site/q")));
    }

    #[test]
    fn test_child_active_through_headers() {
        let tree = vec![MenuItem::header("Group").children(vec![
            MenuItem::header("Inner").children(vec![MenuItem::link("/deep")]),
        ])];
        assert!(resolve_child_active(&tree, Some("/deep")));
    }

    #[test]
    fn test_empty_item() {
        let item = MenuItem::default();
        assert!(!resolve_active(&item, Some("/")));
        assert!(!resolve_child_active(item.child_items(), Some("/")));
    }
}
