use std::sync::Arc;

use crate::catalog::CatalogStore;

/// Shared gateway state.
///
/// The catalog snapshot is built before the server starts and never mutated
/// afterwards, so handlers share it without any locking.
#[derive(Clone)]
pub struct AppState {
    /// Catalog snapshot (read-only)
    pub catalog: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}
