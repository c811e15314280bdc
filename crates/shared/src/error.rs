//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every failure reaching a caller lands in one of these buckets. Nothing is
/// retried; the caller sees the message verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    /// A query parameter could not be parsed.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// The requested export format token is unknown.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The row store failed to answer a read.
    #[error("{0}")]
    StoreFailure(String),

    /// A renderer hit a defect while building an artifact.
    #[error("Render failure: {0}")]
    RenderFailure(String),

    /// Internal server error (configuration, startup).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidFilter(_) | Self::UnsupportedFormat(_) => 400,
            Self::StoreFailure(_) | Self::RenderFailure(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::StoreFailure(_) => "STORE_FAILURE",
            Self::RenderFailure(_) => "RENDER_FAILURE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
