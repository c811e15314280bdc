//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Listing, report, and export routes
//! - Error-to-HTTP mapping
//! - Query extraction with JSON rejections
//! - Attachment responses for rendered artifacts

pub mod error;
pub mod extract;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use cardledger_core::export::ExportService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing, report, and export pipeline.
    pub exports: Arc<ExportService>,
}

impl AppState {
    /// Wraps an export service.
    #[must_use]
    pub fn new(exports: ExportService) -> Self {
        Self {
            exports: Arc::new(exports),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
