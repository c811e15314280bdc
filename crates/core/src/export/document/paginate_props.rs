//! Property-based tests for document pagination.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::layout::DocumentLayout;
use super::paginate::{ChartData, plan_document};
use crate::export::table::{Cell, EXPENSE_HEADERS, TRANSACTION_HEADERS, Table};
use crate::reports::CategoryTotal;

fn table(headers: &'static [&'static str], rows: usize) -> Table {
    Table {
        headers,
        rows: vec![vec![Cell::Empty; headers.len()]; rows],
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// N rows produce ceil(N / K) table pages.
    #[test]
    fn prop_table_pages_are_ceiling(n in 1usize..400) {
        let layout = DocumentLayout::TRANSACTIONS;
        let k = layout.table_capacity();
        let plan = plan_document(&layout, &table(TRANSACTION_HEADERS, n), None).unwrap();

        prop_assert_eq!(plan.pages.len(), n.div_ceil(k));
        prop_assert_eq!(plan.pages.iter().map(|p| p.table_rows).sum::<usize>(), n);
        prop_assert!(plan.pages.iter().all(|p| p.table_rows <= k));
    }

    /// The chart appears exactly once, on the last page, and adds a page
    /// only when the last table page is past the chart band.
    #[test]
    fn prop_chart_placed_once_on_last_page(n in 1usize..200) {
        let layout = DocumentLayout::EXPENSES;
        let k = layout.table_capacity();
        let band = layout.chart_capacity().unwrap();
        let totals = vec![CategoryTotal { category: "Meals".into(), total: Decimal::ONE }];

        let plan = plan_document(
            &layout,
            &table(EXPENSE_HEADERS, n),
            Some(ChartData::Category(&totals)),
        )
        .unwrap();

        let table_pages = n.div_ceil(k);
        let last_rows = n - (table_pages - 1) * k;
        let extra = usize::from(last_rows > band);

        prop_assert_eq!(plan.pages.len(), table_pages + extra);
        prop_assert_eq!(plan.pages.iter().filter(|p| p.has_chart).count(), 1);
        prop_assert!(plan.pages.last().unwrap().has_chart);
    }
}
