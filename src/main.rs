//! Hotel & Menu Catalog Service entry point
//!
//! Builds the catalog snapshot once, then serves it over HTTP:
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌──────────┐
//! │  Config  │───▶│ CatalogStore  │───▶│ Gateway  │
//! │  (YAML)  │    │  (seed data)  │    │  (axum)  │
//! └──────────┘    └───────────────┘    └──────────┘
//! ```
//!
//! The snapshot is immutable after startup; there is no write path.

use std::sync::Arc;

use hotel_menu_service::catalog::seed_catalog;
use hotel_menu_service::config::AppConfig;
use hotel_menu_service::{gateway, logging};

/// Get environment name from command line (--env/-e, defaults to "dev")
fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&get_env());
    let _guard = logging::init_logging(&config);

    let catalog = Arc::new(seed_catalog());
    tracing::info!(
        hotels = catalog.hotel_count(),
        menu_items = catalog.menu_item_count(),
        "catalog snapshot loaded"
    );

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, catalog).await
}
