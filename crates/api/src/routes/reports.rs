//! Report routes.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use cardledger_core::export::ExportKind;
use cardledger_core::filter::FilterParams;
use cardledger_core::reports::{BalanceReport, ExpenseReport, MonthlyReport};

use super::{ExportQuery, export_artifact};
use crate::AppState;
use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::response::Attachment;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/monthly", get(get_monthly))
        .route("/reports/monthly/export", get(export_monthly))
        .route("/reports/expenses", get(get_expenses))
        .route("/reports/expenses/export", get(export_expenses))
        .route("/reports/balance", get(get_balance))
}

/// GET /reports/monthly
async fn get_monthly(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
) -> ApiResult<Json<MonthlyReport>> {
    Ok(Json(state.exports.monthly_report(&filter).await?))
}

/// GET /reports/monthly/export
async fn export_monthly(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
    ApiQuery(export): ApiQuery<ExportQuery>,
) -> ApiResult<Attachment> {
    export_artifact(&state, ExportKind::Monthly, &filter, &export).await
}

/// GET /reports/expenses
async fn get_expenses(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
) -> ApiResult<Json<ExpenseReport>> {
    Ok(Json(state.exports.expense_report(&filter).await?))
}

/// GET /reports/expenses/export
async fn export_expenses(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FilterParams>,
    ApiQuery(export): ApiQuery<ExportQuery>,
) -> ApiResult<Attachment> {
    export_artifact(&state, ExportKind::Expenses, &filter, &export).await
}

/// GET /reports/balance
async fn get_balance(State(state): State<AppState>) -> ApiResult<Json<BalanceReport>> {
    Ok(Json(state.exports.balance().await?))
}
