//! Navtree CLI
//!
//! Loads a menu definition, resolves it against a location, replays clicks
//! and navigations, and prints the tree a renderer would draw.
//!
//! Usage:
//!   navtree-cli menu.json --location /docs/intro --accordion --click 1 --navigate /home

use clap::Parser;
use navtree::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Menu definition (JSON item array or `{config, menu}` document).
    file: std::path::PathBuf,

    /// Current location.
    #[arg(long)]
    location: Option<String>,

    /// Treat the location as a document href instead of a router path.
    #[arg(long)]
    hash: bool,

    /// Only one top-level submenu open at a time.
    #[arg(long)]
    accordion: bool,

    /// Always show every submenu.
    #[arg(long)]
    show_child: bool,

    /// Icon-only collapsed menu.
    #[arg(long)]
    collapsed: bool,

    /// Click a node by dotted index path (e.g. `1.0`). Repeatable, applied in order.
    #[arg(long = "click", value_parser = parse_path)]
    clicks: Vec<NodePath>,

    /// Navigate after the clicks. Repeatable, applied in order.
    #[arg(long = "navigate")]
    navigations: Vec<String>,

    /// Log level written to stderr.
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
}

/// Index path from the top level down, e.g. `[1, 0]`.
#[derive(Debug, Clone)]
struct NodePath(Vec<usize>);

fn parse_path(s: &str) -> Result<NodePath, String> {
    s.split('.')
        .map(|part| {
            part.parse::<usize>()
                .map_err(|e| format!("invalid index '{}': {}", part, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(NodePath)
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|e| format!("invalid log level '{}': {}", s, e))
}

fn print_menu(menu: &SidebarMenu) {
    for node in menu.visible() {
        let indent = "  ".repeat(node.depth as usize);
        let marker = match (node.has_children, node.show) {
            (true, true) => "-",
            (true, false) => "+",
            _ => " ",
        };
        let mut flags = Vec::new();
        if node.active {
            flags.push("active");
        }
        if node.child_active {
            flags.push("child-active");
        }
        if node.disabled {
            flags.push("disabled");
        }
        let label = node
            .title
            .as_deref()
            .or(node.href.as_deref())
            .unwrap_or("(untitled)");
        if flags.is_empty() {
            println!("{}{} {}", indent, marker, label);
        } else {
            println!("{}{} {} [{}]", indent, marker, label, flags.join(", "));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let document = load_document(&args.file)?;
    let mut config = document.config;
    config.show_one_child |= args.accordion;
    config.show_child |= args.show_child;
    config.is_collapsed |= args.collapsed;
    log::debug!("Loaded {} top-level items with {:?}", document.menu.len(), config);

    let navigator = match (args.location, args.hash) {
        (Some(location), false) => Navigator::router(location),
        (Some(location), true) => Navigator::hash(location),
        (None, false) => Navigator::unresolved(NavigationMode::Router),
        (None, true) => Navigator::unresolved(NavigationMode::Hash),
    };
    let menu = SidebarMenu::with_navigator(document.menu, config, navigator.clone());

    for NodePath(path) in &args.clicks {
        let Some(node) = menu.node_at(path) else {
            log::warn!("No node at {:?}, skipping click", path);
            continue;
        };
        let mut event = ClickEvent::new();
        let result = node.click(&mut event, false);
        log::info!(
            "Clicked {:?}: {:?}, default prevented: {}",
            path,
            result,
            event.default_prevented()
        );
    }

    for location in &args.navigations {
        navigator.navigate(location.as_str());
    }

    print_menu(&menu);

    for event in menu.drain_events() {
        log::debug!("{:?}", event);
    }
    Ok(())
}
