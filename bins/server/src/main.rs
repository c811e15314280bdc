//! Cardledger API Server
//!
//! Main entry point for the listing, report, and export service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardledger_api::{AppState, create_router};
use cardledger_core::export::{ExportService, ExportSettings};
use cardledger_db::{PgRowStore, connect};
use cardledger_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let settings = ExportSettings::from_config(&config.export)?;
    info!(
        timezone = %settings.timezone,
        row_cap = settings.row_cap,
        "Export settings loaded"
    );

    // Connect to database
    let db = connect(&config.database).await?;
    info!("Connected to database");

    // Create application state
    let store = PgRowStore::new(db);
    let state = AppState::new(ExportService::new(Arc::new(store), settings));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
