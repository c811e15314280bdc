//! Aggregation over filtered transaction records.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::types::{CategoryTotal, MonthlyBucket};
use crate::records::{CardRecord, TransactionKind, TransactionRecord};

/// Service for computing report views.
pub struct ReportService;

impl ReportService {
    /// Month key for a timestamp, truncated in UTC.
    #[must_use]
    pub fn month_key(at: DateTime<Utc>) -> String {
        at.format("%Y-%m").to_string()
    }

    /// Buckets records by UTC calendar month, ascending by key.
    #[must_use]
    pub fn monthly_buckets<'a, I>(records: I) -> Vec<MonthlyBucket>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut buckets: BTreeMap<String, MonthlyBucket> = BTreeMap::new();

        for record in records {
            let key = Self::month_key(record.occurred_at);
            let bucket = buckets
                .entry(key)
                .or_insert_with_key(|k| MonthlyBucket::empty(k.clone()));
            match record.kind {
                TransactionKind::Credit => bucket.credit_total += record.amount,
                TransactionKind::Debit => bucket.debit_total += record.amount,
            }
        }

        buckets.into_values().collect()
    }

    /// Sums debit amounts per category in order of first occurrence.
    ///
    /// Credits are ignored. Blank or absent categories merge into
    /// [`crate::records::UNCATEGORIZED`].
    #[must_use]
    pub fn category_totals<'a, I>(records: I) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            if record.kind != TransactionKind::Debit {
                continue;
            }
            let label = record.category_label();
            if let Some(&i) = index.get(label) {
                totals[i].total += record.amount;
            } else {
                index.insert(label.to_string(), totals.len());
                totals.push(CategoryTotal {
                    category: label.to_string(),
                    total: record.amount,
                });
            }
        }

        totals
    }

    /// Sum of all card balances.
    #[must_use]
    pub fn balance_total(cards: &[CardRecord]) -> Decimal {
        cards.iter().map(|c| c.balance).sum()
    }

    /// Grand totals of credit and debit amounts, in that order.
    #[cfg(test)]
    pub fn kind_totals<'a, I>(records: I) -> (Decimal, Decimal)
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        records
            .into_iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(credit, debit), r| match r.kind {
                TransactionKind::Credit => (credit + r.amount, debit),
                TransactionKind::Debit => (credit, debit + r.amount),
            })
    }
}
