//! Tests for the location oracle and recomputation on navigation.

use std::sync::{Arc, Mutex};

use navtree::prelude::*;

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::link("/x"),
        MenuItem::link("/y").children(vec![MenuItem::link("/z")]),
        MenuItem::link("/guide").alias(vec!["/manual", "/handbook"]),
    ]
}

fn snapshot(menu: &SidebarMenu) -> Vec<(bool, bool)> {
    let mut out = Vec::new();
    fn walk(nodes: &[MenuNode], out: &mut Vec<(bool, bool)>) {
        for node in nodes {
            out.push((node.is_active(), node.is_child_active()));
            walk(node.children(), out);
        }
    }
    walk(menu.nodes(), &mut out);
    out
}

#[test]
fn test_navigator_notifies_in_order() {
    let nav = Navigator::router("/");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&seen);
    nav.subscribe(move |path| first.lock().unwrap().push(format!("a:{}", path)));
    let second = Arc::clone(&seen);
    nav.subscribe(move |path| second.lock().unwrap().push(format!("b:{}", path)));

    nav.navigate("/next");
    assert_eq!(*seen.lock().unwrap(), vec!["a:/next", "b:/next"]);
    assert_eq!(nav.current().as_deref(), Some("/next"));
}

#[test]
fn test_listener_can_read_navigator() {
    let nav = Navigator::router("/");
    let seen = Arc::new(Mutex::new(None));

    let reader = nav.clone();
    let sink = Arc::clone(&seen);
    nav.subscribe(move |_| *sink.lock().unwrap() = reader.current());

    nav.navigate("/after");
    assert_eq!(seen.lock().unwrap().as_deref(), Some("/after"));
}

#[test]
fn test_unsubscribe() {
    let nav = Navigator::hash("https://x.test/#/");
    let id = nav.subscribe(|_| {});
    assert_eq!(nav.listener_count(), 1);
    assert!(nav.unsubscribe(id));
    assert!(!nav.unsubscribe(id));
    assert_eq!(nav.listener_count(), 0);
    assert_eq!(nav.mode(), NavigationMode::Hash);
}

#[test]
fn test_navigation_recomputes_child_active() {
    let nav = Navigator::router("/app/z");
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    let y = &menu.nodes()[1];
    assert!(y.is_child_active());

    nav.navigate("/app/q");
    assert!(!y.is_child_active());
    assert!(!y.is_active());
}

#[test]
fn test_alias_activation_follows_navigation() {
    let nav = Navigator::router("/");
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    let guide = &menu.nodes()[2];
    assert!(!guide.is_active());

    nav.navigate("/docs/handbook");
    assert!(guide.is_active());
}

#[test]
fn test_repeated_location_is_idempotent() {
    let nav = Navigator::router("/");
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());

    nav.navigate("/app/z");
    let first = snapshot(&menu);
    nav.navigate("/app/z");
    let second = snapshot(&menu);
    menu.refresh();
    let third = snapshot(&menu);

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert!(first.contains(&(false, true)));
}

#[test]
fn test_menu_without_navigator_is_never_active() {
    let menu = SidebarMenu::new(menu_items(), MenuConfig::new());
    assert!(menu.navigator().is_none());
    assert!(snapshot(&menu).iter().all(|&(a, c)| !a && !c));
}

#[test]
fn test_unresolved_navigator_is_never_active() {
    let nav = Navigator::unresolved(NavigationMode::Router);
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    assert!(snapshot(&menu).iter().all(|&(a, c)| !a && !c));

    nav.navigate("/x");
    assert!(menu.nodes()[0].is_active());
}

#[test]
fn test_drop_detaches_from_navigator() {
    let nav = Navigator::router("/");
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    assert_eq!(nav.listener_count(), 1);

    drop(menu);
    assert_eq!(nav.listener_count(), 0);
}

#[test]
fn test_detached_menu_stops_following() {
    let nav = Navigator::router("/x");
    let mut menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    assert!(menu.nodes()[0].is_active());

    menu.detach();
    nav.navigate("/y");
    assert!(menu.nodes()[0].is_active());
    assert!(!menu.nodes()[1].is_active());
}

#[test]
fn test_navigation_marks_changed_nodes_dirty() {
    let nav = Navigator::router("/");
    let menu = SidebarMenu::with_navigator(menu_items(), MenuConfig::new(), nav.clone());
    let x = &menu.nodes()[0];
    let guide = &menu.nodes()[2];

    nav.navigate("/x");
    assert!(x.is_dirty());
    assert!(!guide.is_dirty());

    x.clear_dirty();
    nav.navigate("/x");
    assert!(!x.is_dirty());
}
