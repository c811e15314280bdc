//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Credit and debit totals for one UTC calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Sum of credit amounts.
    #[serde(rename = "credit")]
    pub credit_total: Decimal,
    /// Sum of debit amounts.
    #[serde(rename = "debit")]
    pub debit_total: Decimal,
}

impl MonthlyBucket {
    /// Creates an empty bucket for `month`.
    #[must_use]
    pub const fn empty(month: String) -> Self {
        Self {
            month,
            credit_total: Decimal::ZERO,
            debit_total: Decimal::ZERO,
        }
    }

    /// Larger of the two totals.
    #[must_use]
    pub fn peak(&self) -> Decimal {
        self.credit_total.max(self.debit_total)
    }
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: String,
    /// Sum of debit amounts.
    pub total: Decimal,
}

/// Monthly summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Buckets in ascending month order.
    pub months: Vec<MonthlyBucket>,
}

/// Expense-by-category response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReport {
    /// Totals in first-seen order.
    pub items: Vec<CategoryTotal>,
}

/// Card balance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Sum of every card's current balance.
    pub total: Decimal,
}
