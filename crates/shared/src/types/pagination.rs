//! Offset pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Largest page a caller may request.
pub const MAX_LIMIT: u64 = 200;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u64 = 50;

/// A window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWindow {
    /// Number of rows skipped from the start.
    pub offset: u64,
    /// Maximum number of rows returned.
    pub limit: u64,
}

impl Default for RowWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RowWindow {
    /// Creates a window starting at row zero.
    #[must_use]
    pub const fn first(limit: u64) -> Self {
        Self { offset: 0, limit }
    }

    /// Builds a listing window from raw query values.
    ///
    /// `limit` falls back to [`DEFAULT_LIMIT`] and is clamped to
    /// `1..=MAX_LIMIT`; a negative `offset` is treated as zero.
    #[must_use]
    pub fn from_query(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = limit.map_or(DEFAULT_LIMIT, |l| l.clamp(1, MAX_LIMIT.cast_signed()).cast_unsigned());
        let offset = offset.map_or(0, |o| o.max(0).cast_unsigned());
        Self { offset, limit }
    }
}

/// Response wrapper for a listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The rows in the current window.
    pub data: Vec<T>,
    /// Total number of rows matching the filter across all windows.
    pub count: u64,
}

impl<T> PageResponse<T> {
    /// Creates a new page response.
    #[must_use]
    pub const fn new(data: Vec<T>, count: u64) -> Self {
        Self { data, count }
    }
}
