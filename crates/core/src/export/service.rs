//! Request pipeline: parameters to filter, rows, aggregates, and artifact.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cardledger_shared::config::ExportConfig;
use cardledger_shared::types::{PageResponse, RowWindow};
use cardledger_shared::AppError;

use super::document::{ChartData, render_document};
use super::error::ExportError;
use super::filename::{CardLabel, FileContext, build_file_name};
use super::spreadsheet::render_workbook;
use super::table::Table;
use super::tabular::render_csv;
use super::types::{ExportArtifact, ExportFormat, ExportKind};
use crate::filter::{FilterParams, TransactionFilter};
use crate::records::TransactionRecord;
use crate::reports::{BalanceReport, ExpenseReport, MonthlyReport, ReportService};
use crate::store::RowStore;

/// Tunables for export rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    /// Zone used to print transaction timestamps.
    pub timezone: Tz,
    /// Most transaction rows a single export carries.
    pub row_cap: u64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            row_cap: 50_000,
        }
    }
}

impl ExportSettings {
    /// Builds settings from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] for an unknown time zone or a zero row cap.
    pub fn from_config(config: &ExportConfig) -> Result<Self, AppError> {
        let timezone = config
            .timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Internal(format!("export.timezone: {e}")))?;
        if config.row_cap == 0 {
            return Err(AppError::Internal("export.row_cap must be positive".into()));
        }
        Ok(Self {
            timezone,
            row_cap: config.row_cap,
        })
    }
}

/// Runs listing, report, and export requests against a row store.
#[derive(Clone)]
pub struct ExportService {
    store: Arc<dyn RowStore>,
    settings: ExportSettings,
}

impl std::fmt::Debug for ExportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ExportService {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>, settings: ExportSettings) -> Self {
        Self { store, settings }
    }

    /// One window of matching transactions, newest first, with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Filter`] or [`ExportError::Store`].
    pub async fn list_transactions(
        &self,
        params: &FilterParams,
        window: RowWindow,
    ) -> Result<PageResponse<TransactionRecord>, ExportError> {
        let filter = TransactionFilter::resolve(params)?;
        let data = self.store.fetch_transactions(&filter, Some(window)).await?;
        let count = self.store.count_transactions(&filter).await?;
        Ok(PageResponse::new(data, count))
    }

    /// Monthly credit/debit buckets for matching transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Filter`] or [`ExportError::Store`].
    pub async fn monthly_report(&self, params: &FilterParams) -> Result<MonthlyReport, ExportError> {
        let rows = self.matching_rows(&TransactionFilter::resolve(params)?).await?;
        Ok(MonthlyReport {
            months: ReportService::monthly_buckets(&rows),
        })
    }

    /// Expense totals per category for matching transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Filter`] or [`ExportError::Store`].
    pub async fn expense_report(&self, params: &FilterParams) -> Result<ExpenseReport, ExportError> {
        let rows = self.matching_rows(&TransactionFilter::resolve(params)?).await?;
        Ok(ExpenseReport {
            items: ReportService::category_totals(&rows),
        })
    }

    /// Sum of every card balance.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Store`].
    pub async fn balance(&self) -> Result<BalanceReport, ExportError> {
        let cards = self.store.fetch_cards().await?;
        Ok(BalanceReport {
            total: ReportService::balance_total(&cards),
        })
    }

    /// Renders an export of `kind` in the format named by `format`.
    ///
    /// The format token is checked before any read. `now` stamps the file name.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`], [`ExportError::Filter`],
    /// [`ExportError::Store`], or a render error.
    pub async fn export(
        &self,
        kind: ExportKind,
        params: &FilterParams,
        format: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ExportArtifact, ExportError> {
        let format = ExportFormat::from_param(format)?;
        let filter = TransactionFilter::resolve(params)?;

        let rows = match kind {
            ExportKind::Transactions => {
                self.store
                    .fetch_transactions(&filter, Some(RowWindow::first(self.settings.row_cap)))
                    .await?
            }
            ExportKind::Monthly | ExportKind::Expenses => self.matching_rows(&filter).await?,
        };

        let card = match filter.card_id {
            Some(id) => Some(CardLabel::from_lookup(
                id,
                self.store.find_card(id).await?.as_ref(),
            )),
            None => None,
        };

        let bytes = self.render(kind, format, &rows)?;
        let context = FileContext::from_params(kind, params, card);

        Ok(ExportArtifact {
            mime_type: format.mime_type(),
            filename: build_file_name(kind, format, &context, now),
            bytes,
        })
    }

    fn render(
        &self,
        kind: ExportKind,
        format: ExportFormat,
        rows: &[TransactionRecord],
    ) -> Result<Vec<u8>, ExportError> {
        let buckets;
        let totals;
        let (table, chart) = match kind {
            ExportKind::Transactions => (Table::transactions(rows, self.settings.timezone), None),
            ExportKind::Monthly => {
                buckets = ReportService::monthly_buckets(rows);
                (Table::monthly(&buckets), Some(ChartData::Trend(&buckets)))
            }
            ExportKind::Expenses => {
                totals = ReportService::category_totals(rows);
                (Table::expenses(&totals), Some(ChartData::Category(&totals)))
            }
        };

        match format {
            ExportFormat::Csv => Ok(render_csv(&table).into_bytes()),
            ExportFormat::Spreadsheet => render_workbook(kind, &table),
            ExportFormat::Document => render_document(kind, &table, chart),
        }
    }

    async fn matching_rows(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>, ExportError> {
        Ok(self.store.fetch_transactions(filter, None).await?)
    }
}
