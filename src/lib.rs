//! Hotel & Menu Catalog Service
//!
//! A read-only catalog API over a static in-memory dataset of
//! hotels/restaurants and their menus.
//!
//! # Modules
//!
//! - [`catalog`] - Entity types, the immutable snapshot, and the search queries
//! - [`gateway`] - HTTP surface (axum router, handlers, OpenAPI docs)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use catalog::{
    CatalogError, CatalogStore, Hotel, HotelSort, MenuItem, SearchFilter, seed_catalog,
};
pub use config::AppConfig;
