//! Transaction listing and export routes.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use chrono::{DateTime, Utc};
use cardledger_core::export::ExportKind;
use cardledger_core::filter::FilterParams;
use cardledger_core::records::TransactionRecord;
use cardledger_shared::AppError;
use cardledger_shared::types::{PageResponse, RowWindow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExportQuery, export_artifact};
use crate::AppState;
use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::response::Attachment;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/export", get(export_transactions))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Raw listing window parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Rows per page, clamped to `1..=200`.
    pub limit: Option<String>,
    /// Rows to skip; negative values count as zero.
    pub offset: Option<String>,
}

impl PageQuery {
    /// Parses the window, rejecting values that are not integers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidFilter`] for a non-integer value.
    pub fn window(&self) -> Result<RowWindow, AppError> {
        Ok(RowWindow::from_query(
            parse_int("limit", self.limit.as_deref())?,
            parse_int("offset", self.offset.as_deref())?,
        ))
    }
}

fn parse_int(field: &str, value: Option<&str>) -> Result<Option<i64>, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| AppError::InvalidFilter(format!("{field}: {v}")))
        })
        .transpose()
}

// ============================================================================
// Response Types
// ============================================================================

/// One row of the transaction listing.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// When the transaction happened.
    pub transaction_date: DateTime<Utc>,
    /// `credit` or `debit`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Positive amount.
    pub amount: Decimal,
    /// Expense category.
    pub category: Option<String>,
    /// Vendor name.
    pub vendor_name: Option<String>,
    /// Client or partner name.
    pub client_partner_name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Card ID.
    pub card_id: Uuid,
    /// Card name, when the card exists.
    pub card_name: Option<String>,
    /// Card number digits, when the card exists.
    pub card_number: Option<String>,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(record: TransactionRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            transaction_date: record.occurred_at,
            kind: record.kind.as_str(),
            amount: record.amount,
            category: record.category,
            vendor_name: record.vendor,
            client_partner_name: record.counterparty,
            description: record.description,
            card_id: record.card.id.into_inner(),
            card_name: record.card.name,
            card_number: record.card.last4,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /transactions
async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Json<PageResponse<TransactionResponse>>> {
    let window = page.window()?;
    let page = state.exports.list_transactions(&filter, window).await?;

    Ok(Json(PageResponse::new(
        page.data.into_iter().map(TransactionResponse::from).collect(),
        page.count,
    )))
}

/// GET /transactions/export
async fn export_transactions(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
    ApiQuery(export): ApiQuery<ExportQuery>,
) -> ApiResult<Attachment> {
    export_artifact(&state, ExportKind::Transactions, &filter, &export).await
}
