//! Property-based tests for report aggregation.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::ReportService;
use crate::records::{TransactionKind, TransactionRecord};
use crate::testing::{at, tx};

/// Strategy to generate a positive amount from 0.01 to 100,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Debit), Just(TransactionKind::Credit)]
}

/// Timestamps spread across roughly three years from 2023-01-01.
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..94_608_000i64).prop_map(|secs| at(2023, 1, 1, 0, 0, 0) + Duration::seconds(secs))
}

fn category_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("")),
        Just(Some("Meals")),
        Just(Some("Travel")),
        Just(Some("Uncategorized")),
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(
        (instant_strategy(), kind_strategy(), positive_amount(), category_strategy()),
        0..60,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(1u128..)
            .map(|((when, kind, amount, category), seq)| tx(seq, when, kind, amount, category))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Bucket totals add up to the per-kind grand totals.
    #[test]
    fn prop_buckets_preserve_totals(records in records_strategy()) {
        let buckets = ReportService::monthly_buckets(&records);
        let (credit, debit) = ReportService::kind_totals(&records);

        prop_assert_eq!(buckets.iter().map(|b| b.credit_total).sum::<Decimal>(), credit);
        prop_assert_eq!(buckets.iter().map(|b| b.debit_total).sum::<Decimal>(), debit);
    }

    /// Keys are strictly ascending and one exists per distinct month.
    #[test]
    fn prop_bucket_keys_sorted_and_distinct(records in records_strategy()) {
        let buckets = ReportService::monthly_buckets(&records);

        for pair in buckets.windows(2) {
            prop_assert!(pair[0].month < pair[1].month);
        }
        let mut months: Vec<String> = records
            .iter()
            .map(|r| ReportService::month_key(r.occurred_at))
            .collect();
        months.sort();
        months.dedup();
        prop_assert_eq!(buckets.len(), months.len());
    }

    /// Category totals cover exactly the debit amounts.
    #[test]
    fn prop_category_totals_sum_debits(records in records_strategy()) {
        let totals = ReportService::category_totals(&records);
        let (_, debit) = ReportService::kind_totals(&records);

        prop_assert_eq!(totals.iter().map(|c| c.total).sum::<Decimal>(), debit);
        prop_assert!(totals.iter().all(|c| !c.category.is_empty()));
    }

    /// Input order does not change the monthly view.
    #[test]
    fn prop_buckets_independent_of_order(records in records_strategy()) {
        let mut reversed = records.clone();
        reversed.reverse();

        prop_assert_eq!(
            ReportService::monthly_buckets(&records),
            ReportService::monthly_buckets(&reversed)
        );
    }
}
