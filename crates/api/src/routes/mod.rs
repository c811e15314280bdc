//! API route definitions.

use axum::Router;
use chrono::Utc;
use cardledger_core::export::ExportKind;
use cardledger_core::filter::FilterParams;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiResult;
use crate::response::Attachment;

pub mod health;
pub mod reports;
pub mod transactions;


/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(transactions::routes())
        .merge(reports::routes())
}

/// Query parameter selecting the export format.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// `csv` (default), `xlsx`/`excel`, or `pdf`.
    pub format: Option<String>,
}

/// Renders an export of `kind` for the given filter and format.
async fn export_artifact(
    state: &AppState,
    kind: ExportKind,
    filter: &FilterParams,
    query: &ExportQuery,
) -> ApiResult<Attachment> {
    let artifact = state
        .exports
        .export(kind, filter, query.format.as_deref(), Utc::now())
        .await?;
    Ok(Attachment(artifact))
}
