//! Catalog core
//!
//! The in-memory hotel/menu dataset and the read queries served against it:
//!
//! - [`model`] - Entity types (Hotel, MenuItem, ...)
//! - [`store`] - Immutable snapshot with id lookups
//! - [`query`] - Search filtering and sorting
//! - [`seed`] - The fixed MVP dataset

pub mod model;
pub mod query;
pub mod seed;
pub mod store;

// Re-export commonly used types at module root
pub use model::{Address, GeoPoint, Hotel, MenuItem, MenuOption, MenuOptionChoice};
pub use query::{HotelSort, SearchFilter};
pub use seed::seed_catalog;
pub use store::{CatalogError, CatalogStore};
