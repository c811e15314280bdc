//! Header + row matrix shared by every renderer.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::records::TransactionRecord;
use crate::reports::{CategoryTotal, MonthlyBucket};

/// Transaction export headers.
pub const TRANSACTION_HEADERS: &[&str] = &[
    "Date",
    "Type",
    "Amount",
    "Category",
    "Vendor",
    "Client/Partner",
    "Description",
    "Card Name",
    "Card Last4",
    "Card ID",
];

/// Monthly export headers.
pub const MONTHLY_HEADERS: &[&str] = &["Month", "Income (credit)", "Expense (debit)"];

/// Expense export headers.
pub const EXPENSE_HEADERS: &[&str] = &["Category", "Total Expense"];

/// Marker written into otherwise empty artifacts.
pub const NO_DATA: &str = "No data.";

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text.
    Text(String),
    /// Monetary amount.
    Amount(Decimal),
    /// Absent value.
    Empty,
}

impl Cell {
    /// Text form used by the delimited and document renderers.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Amount(d) => d.normalize().to_string(),
            Self::Empty => String::new(),
        }
    }

    fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |s| Self::Text(s.to_string()))
    }
}

/// An export table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column headers.
    pub headers: &'static [&'static str],
    /// Data rows, each as wide as `headers`.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// One row per transaction, timestamps printed in `zone`.
    #[must_use]
    pub fn transactions(records: &[TransactionRecord], zone: Tz) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(format_timestamp(r.occurred_at, zone)),
                    Cell::Text(r.kind.as_str().to_string()),
                    Cell::Amount(r.amount),
                    Cell::text(r.category.as_deref()),
                    Cell::text(r.vendor.as_deref()),
                    Cell::text(r.counterparty.as_deref()),
                    Cell::text(r.description.as_deref()),
                    Cell::text(r.card.name.as_deref()),
                    Cell::text(r.card.last4.as_deref()),
                    Cell::Text(r.card.id.to_string()),
                ]
            })
            .collect();

        Self {
            headers: TRANSACTION_HEADERS,
            rows,
        }
    }

    /// One row per month bucket.
    #[must_use]
    pub fn monthly(buckets: &[MonthlyBucket]) -> Self {
        let rows = buckets
            .iter()
            .map(|b| {
                vec![
                    Cell::Text(b.month.clone()),
                    Cell::Amount(b.credit_total),
                    Cell::Amount(b.debit_total),
                ]
            })
            .collect();

        Self {
            headers: MONTHLY_HEADERS,
            rows,
        }
    }

    /// One row per category, in the order given.
    #[must_use]
    pub fn expenses(totals: &[CategoryTotal]) -> Self {
        let rows = totals
            .iter()
            .map(|t| vec![Cell::Text(t.category.clone()), Cell::Amount(t.total)])
            .collect();

        Self {
            headers: EXPENSE_HEADERS,
            rows,
        }
    }

    /// Rows to write to flat formats: the data, or a single marker row.
    #[must_use]
    pub fn body(&self) -> Vec<Vec<Cell>> {
        if self.rows.is_empty() {
            let mut marker = vec![Cell::Empty; self.headers.len()];
            if let Some(first) = marker.first_mut() {
                *first = Cell::Text(NO_DATA.to_string());
            }
            vec![marker]
        } else {
            self.rows.clone()
        }
    }

    /// Sum of the amount cells in column `index`.
    #[cfg(test)]
    pub fn column_total(&self, index: usize) -> Decimal {
        self.rows
            .iter()
            .filter_map(|row| match row.get(index) {
                Some(Cell::Amount(d)) => Some(*d),
                _ => None,
            })
            .sum()
    }
}

/// Prints `at` as `YYYY-MM-DD HH:mm` in `zone`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>, zone: Tz) -> String {
    at.with_timezone(&zone).format("%Y-%m-%d %H:%M").to_string()
}
