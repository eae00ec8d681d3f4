//! HTTP gateway
//!
//! Router wiring for the catalog API. All routes are public reads; CORS is
//! wide open (development posture).

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::CatalogStore;
use state::AppState;

/// Build the application router around a catalog snapshot.
pub fn build_router(catalog: Arc<CatalogStore>) -> Router {
    let state = Arc::new(AppState::new(catalog));

    Router::new()
        .route("/hotels", get(handlers::search_hotels))
        .route("/hotels/{hotelId}", get(handlers::get_hotel))
        .route("/hotels/{hotelId}/menu", get(handlers::get_hotel_menu))
        .route("/", get(handlers::service_info))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        // Any origin/method/header: development posture
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP gateway server.
pub async fn run_server(
    host: &str,
    port: u16,
    catalog: Arc<CatalogStore>,
) -> anyhow::Result<()> {
    let app = build_router(catalog);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr} (port already in use?)"))?;

    tracing::info!("Gateway listening on http://{addr}");
    tracing::info!("API docs: http://{addr}/docs");

    axum::serve(listener, app)
        .await
        .context("gateway server error")
}
