//! End-to-end export scenarios over the in-memory store.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::{ExportService, ExportSettings};
use super::types::ExportKind;
use super::ExportError;
use crate::filter::FilterParams;
use crate::records::{TransactionKind, TransactionRecord};
use crate::reports::ReportService;
use crate::store::InMemoryRowStore;
use crate::testing::{at, card, card_id, credit, debit, scenario, tx};

fn service(rows: Vec<TransactionRecord>) -> ExportService {
    let store = InMemoryRowStore::new(vec![card(1, "Team A", "1234", dec!(500))], rows);
    ExportService::new(Arc::new(store), ExportSettings::default())
}

fn mixed_rows() -> Vec<TransactionRecord> {
    let mut rows = scenario();
    let mut lunch = debit(4, at(2024, 2, 14, 12, 0, 0), dec!(18.40), "Meals");
    lunch.description = Some("Lunch, downtown".to_string());
    lunch.vendor = Some("The \"Corner\" Deli".to_string());
    rows.push(lunch);
    rows.push(tx(5, at(2024, 3, 2, 9, 0, 0), TransactionKind::Debit, dec!(7.25), None));
    rows.push(credit(6, at(2024, 3, 30, 18, 0, 0), dec!(120.10)));
    rows
}

fn decode(bytes: &[u8]) -> Vec<csv::StringRecord> {
    csv::Reader::from_reader(bytes)
        .records()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn now() -> chrono::DateTime<chrono::Utc> {
    at(2024, 4, 1, 10, 20, 30)
}

#[tokio::test]
async fn test_amount_columns_agree_with_aggregates() {
    let service = service(mixed_rows());
    let params = FilterParams::default();
    let rows = mixed_rows();
    let (credit_total, debit_total) = ReportService::kind_totals(&rows);

    let tx_csv = service
        .export(ExportKind::Transactions, &params, Some("csv"), now())
        .await
        .unwrap();
    let (mut credits, mut debits) = (Decimal::ZERO, Decimal::ZERO);
    for record in decode(&tx_csv.bytes) {
        let amount = Decimal::from_str(&record[2]).unwrap();
        match &record[1] {
            "credit" => credits += amount,
            _ => debits += amount,
        }
    }
    assert_eq!((credits, debits), (credit_total, debit_total));

    let monthly = service
        .export(ExportKind::Monthly, &params, None, now())
        .await
        .unwrap();
    let months = decode(&monthly.bytes);
    let income: Decimal = months.iter().map(|r| Decimal::from_str(&r[1]).unwrap()).sum();
    let expense: Decimal = months.iter().map(|r| Decimal::from_str(&r[2]).unwrap()).sum();
    assert_eq!((income, expense), (credit_total, debit_total));

    let expenses = service
        .export(ExportKind::Expenses, &params, Some("csv"), now())
        .await
        .unwrap();
    let by_category: Decimal = decode(&expenses.bytes)
        .iter()
        .map(|r| Decimal::from_str(&r[1]).unwrap())
        .sum();
    assert_eq!(by_category, debit_total);
}

#[tokio::test]
async fn test_csv_round_trips_awkward_text() {
    let artifact = service(mixed_rows())
        .export(ExportKind::Transactions, &FilterParams::default(), None, now())
        .await
        .unwrap();

    let text = String::from_utf8(artifact.bytes.clone()).unwrap();
    assert!(text.contains("\"Lunch, downtown\""));

    let records = decode(&artifact.bytes);
    let lunch = records.iter().find(|r| &r[2] == "18.4").unwrap();
    assert_eq!(&lunch[4], "The \"Corner\" Deli");
    assert_eq!(&lunch[6], "Lunch, downtown");
    assert_eq!(&lunch[7], "Team A");
    assert_eq!(&lunch[8], "1234");
}

#[tokio::test]
async fn test_report_json_matches_scenario() {
    let service = service(scenario());
    let params = FilterParams::default();

    let monthly = service.monthly_report(&params).await.unwrap();
    assert_eq!(monthly.months.len(), 2);
    assert_eq!(monthly.months[0].debit_total, dec!(75));
    assert_eq!(monthly.months[1].credit_total, dec!(1000));

    let expenses = service.expense_report(&params).await.unwrap();
    assert_eq!(expenses.items.len(), 1);
    assert_eq!(expenses.items[0].total, dec!(75));

    assert_eq!(service.balance().await.unwrap().total, dec!(500));
}

#[tokio::test]
async fn test_filter_is_shared_by_listing_reports_and_exports() {
    let service = service(mixed_rows());
    let params = FilterParams {
        start: Some("2024-02-01".into()),
        end: Some("2024-03-02".into()),
        ..FilterParams::default()
    };

    let listing = service
        .list_transactions(&params, cardledger_shared::types::RowWindow::default())
        .await
        .unwrap();
    let exported = service
        .export(ExportKind::Transactions, &params, None, now())
        .await
        .unwrap();
    let monthly = service.monthly_report(&params).await.unwrap();

    assert_eq!(listing.count, 3);
    assert_eq!(decode(&exported.bytes).len(), 3);
    let bucketed: Decimal = monthly
        .months
        .iter()
        .map(|m| m.credit_total + m.debit_total)
        .sum();
    let listed: Decimal = listing.data.iter().map(|r| r.amount).sum();
    assert_eq!(bucketed, listed);
}

#[tokio::test]
async fn test_card_filter_names_the_file() {
    let params = FilterParams {
        card_id: Some(card_id(1).to_string()),
        ..FilterParams::default()
    };
    let artifact = service(scenario())
        .export(ExportKind::Expenses, &params, Some("xlsx"), now())
        .await
        .unwrap();

    assert_eq!(
        artifact.filename,
        "expenses_card-Team_A-1234-2024-04-01-10-20-30.xlsx"
    );
    assert_eq!(
        artifact.mime_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[tokio::test]
async fn test_transactions_pdf_paginates_120_rows_into_four_pages() {
    let rows: Vec<_> = (0..120)
        .map(|i| debit(i, at(2024, 1, 1, 0, 0, 0), dec!(1), "Meals"))
        .collect();
    let artifact = service(rows)
        .export(ExportKind::Transactions, &FilterParams::default(), Some("pdf"), now())
        .await
        .unwrap();

    let pages = count(&artifact.bytes, b"/Type /Page") - count(&artifact.bytes, b"/Type /Pages");
    assert_eq!(pages, 4);
    assert_eq!(artifact.mime_type, "application/pdf");
}

#[tokio::test]
async fn test_zero_rows_produce_valid_artifacts_in_every_format() {
    let service = service(Vec::new());
    let params = FilterParams::default();

    for kind in [ExportKind::Transactions, ExportKind::Monthly, ExportKind::Expenses] {
        let csv = service.export(kind, &params, Some("csv"), now()).await.unwrap();
        let records = decode(&csv.bytes);
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "No data.");

        let xlsx = service.export(kind, &params, Some("excel"), now()).await.unwrap();
        assert!(xlsx.bytes.starts_with(b"PK"));

        let pdf = service.export(kind, &params, Some("pdf"), now()).await.unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF-"));
        assert!(count(&pdf.bytes, b"(No data.)") == 1);
    }
}

#[tokio::test]
async fn test_format_is_checked_before_reading() {
    let service = ExportService::new(
        Arc::new(InMemoryRowStore::failing("down")),
        ExportSettings::default(),
    );

    let err = service
        .export(ExportKind::Monthly, &FilterParams::default(), Some("docx"), now())
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat(_)));

    let err = service
        .export(ExportKind::Monthly, &FilterParams::default(), Some("csv"), now())
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Store(_)));
}

#[tokio::test]
async fn test_row_cap_limits_transaction_exports() {
    let rows: Vec<_> = (0..10)
        .map(|i| debit(i, at(2024, 1, 1, 0, 0, 0), dec!(1), "Meals"))
        .collect();
    let store = InMemoryRowStore::new(Vec::new(), rows);
    let settings = ExportSettings {
        row_cap: 4,
        ..ExportSettings::default()
    };
    let artifact = ExportService::new(Arc::new(store), settings)
        .export(ExportKind::Transactions, &FilterParams::default(), None, now())
        .await
        .unwrap();

    assert_eq!(decode(&artifact.bytes).len(), 4);
}

#[test]
fn test_settings_reject_unknown_zone() {
    let config = cardledger_shared::config::ExportConfig {
        timezone: "Mars/Olympus".to_string(),
        row_cap: 10,
    };
    assert!(ExportSettings::from_config(&config).is_err());

    let config = cardledger_shared::config::ExportConfig {
        timezone: "Asia/Jakarta".to_string(),
        row_cap: 10,
    };
    let settings = ExportSettings::from_config(&config).unwrap();
    assert_eq!(settings.timezone, chrono_tz::Asia::Jakarta);
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}
