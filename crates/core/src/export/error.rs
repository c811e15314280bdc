//! Export error types.

use thiserror::Error;
use cardledger_shared::AppError;

use crate::filter::FilterError;
use crate::store::StoreError;

/// Errors raised while producing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The format token is not one of `csv`, `xlsx`, `excel`, `pdf`.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Filter parameters could not be resolved.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The row store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The workbook encoder rejected the data.
    #[error("workbook: {0}")]
    Workbook(String),

    /// A document layout table is inconsistent with the data it lays out.
    #[error("layout: {0}")]
    Layout(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(token) => Self::UnsupportedFormat(token),
            ExportError::Filter(e) => e.into(),
            ExportError::Store(e) => e.into(),
            ExportError::Workbook(_) | ExportError::Layout(_) => {
                Self::RenderFailure(err.to_string())
            }
        }
    }
}
