//! Liveness endpoint.
//!
//! Answers without touching the row store, so it stays green while the
//! database is down.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "cardledger";

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct Liveness {
    /// Always `ok` when the process answers.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version of the running build.
    pub version: &'static str,
}

impl Liveness {
    const fn current() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /health
async fn liveness() -> Json<Liveness> {
    Json(Liveness::current())
}

/// Creates the liveness route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}
