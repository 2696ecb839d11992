//! Caredesk console navigation inspector.
//!
//! Loads a console configuration and prints the sidebar and route decision
//! exactly as a session with the given role would see them. Useful for
//! reviewing role coverage without standing up the web console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use caredesk_console::config::ConsoleConfig;
use caredesk_console::nav::{NavEntry, NavState, NavView};
use caredesk_console::session::SessionContext;

#[derive(Debug, Parser)]
#[command(name = "caredesk", about = "Inspect console navigation for a role")]
struct Cli {
    /// Path to the console configuration (TOML or JSON).
    #[arg(short, long, default_value = "console.toml")]
    config: PathBuf,

    /// Role to view as; omit for an anonymous session.
    #[arg(short, long)]
    role: Option<String>,

    /// Current route path used for active and guard checks.
    #[arg(short, long, default_value = "/dashboard")]
    path: String,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = ConsoleConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    info!(
        nav_entries = config.nav.len(),
        routes = config.routes.len(),
        "configuration loaded"
    );

    let session = match cli.role {
        Some(role) => SessionContext::authenticated(role, &cli.path),
        None => SessionContext::anonymous(&cli.path),
    };

    let state = NavState::new();
    let view = NavView::build(&config.nav, &state, &session);

    println!(
        "navigation for {} at {}:",
        session.role().unwrap_or("anonymous"),
        session.current_path()
    );
    for entry in &view.entries {
        print_entry(entry, 0);
    }

    let decision = config.routes.decide(session.current_path(), session.role());
    println!("\naccess to {}: {decision:?}", session.current_path());

    Ok(())
}

fn print_entry(entry: &NavEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if entry.active { "*" } else { " " };
    let fold = if entry.expandable { ">" } else { " " };
    println!("{indent}{marker}{fold} {}  {}", entry.name, entry.path);
    for child in &entry.children {
        print_entry(child, depth + 1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
