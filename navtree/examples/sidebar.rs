//! Sidebar Example
//!
//! Builds an accordion sidebar, walks through a few navigations and clicks,
//! and prints what a renderer would draw after each step.
//! Logs go to `sidebar.log`.

use std::fs::File;

use navtree::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn items() -> Vec<MenuItem> {
    vec![
        MenuItem::link("/").title("Dashboard"),
        MenuItem::header("Content").children(vec![
            MenuItem::link("/pages").title("Pages").alias("/pages/new"),
            MenuItem::link("/posts").title("Posts"),
        ]),
        MenuItem::header("Settings").children(vec![
            MenuItem::link("/settings/general").title("General"),
            MenuItem::link("/settings/billing").title("Billing").disabled(),
        ]),
    ]
}

fn print_menu(step: &str, menu: &SidebarMenu) {
    println!("== {}", step);
    for node in menu.visible() {
        let indent = "  ".repeat(node.depth as usize);
        let marker = if node.has_children {
            if node.show { "▼" } else { "▶" }
        } else {
            " "
        };
        let state = match (node.active, node.child_active) {
            (true, _) => " [active]",
            (false, true) => " [child active]",
            _ => "",
        };
        println!(
            "{}{} {}{}",
            indent,
            marker,
            node.title.as_deref().unwrap_or("-"),
            state
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("sidebar.log")?,
    )?;

    let nav = Navigator::router("/pages/new");
    let menu = SidebarMenu::with_navigator(items(), MenuConfig::new().show_one_child(), nav.clone());
    print_menu("start on /pages/new", &menu);

    let settings = menu.nodes()[2].id();
    menu.click(settings, &mut ClickEvent::new(), false);
    print_menu("open Settings", &menu);

    let mut event = ClickEvent::new();
    if let Some(billing) = menu.node_at(&[2, 1]) {
        billing.click(&mut event, false);
    }
    println!("billing click prevented: {}", event.default_prevented());

    nav.navigate("/settings/general");
    print_menu("navigate to /settings/general", &menu);

    for event in menu.drain_events() {
        log::info!("menu event: {:?}", event);
    }
    Ok(())
}
