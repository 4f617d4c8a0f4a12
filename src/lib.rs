use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod expedite;
pub mod handlers;

use crate::catalog::StockCatalog;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StockCatalog>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(StockCatalog::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Inventory status ────────────────────────────────────────────────
        .route(
            "/api/inventory/status",
            post(handlers::inventory::inventory_status),
        )

        // ── Order expediting ────────────────────────────────────────────────
        .route(
            "/api/orders/expedite",
            post(handlers::orders::check_expedite),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
