//! Record builders shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use cardledger_shared::types::{CardId, TransactionId};

use crate::records::{CardRecord, CardRef, TransactionKind, TransactionRecord};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

pub fn card_id(n: u128) -> CardId {
    CardId::from_uuid(Uuid::from_u128(n))
}

pub fn tx(
    seq: u128,
    occurred_at: DateTime<Utc>,
    kind: TransactionKind,
    amount: Decimal,
    category: Option<&str>,
) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::from_uuid(Uuid::from_u128(seq)),
        kind,
        amount,
        occurred_at,
        category: category.map(str::to_string),
        vendor: None,
        counterparty: None,
        description: None,
        card: CardRef::bare(card_id(1)),
    }
}

pub fn debit(seq: u128, occurred_at: DateTime<Utc>, amount: Decimal, category: &str) -> TransactionRecord {
    tx(seq, occurred_at, TransactionKind::Debit, amount, Some(category))
}

pub fn credit(seq: u128, occurred_at: DateTime<Utc>, amount: Decimal) -> TransactionRecord {
    tx(seq, occurred_at, TransactionKind::Credit, amount, None)
}

pub fn card(n: u128, name: &str, last4: &str, balance: Decimal) -> CardRecord {
    CardRecord {
        id: card_id(n),
        last4: last4.to_string(),
        name: name.to_string(),
        department: None,
        balance,
    }
}

/// The three-row scenario used across report and export tests.
pub fn scenario() -> Vec<TransactionRecord> {
    vec![
        debit(1, at(2024, 1, 15, 9, 0, 0), Decimal::from(50), "Meals"),
        debit(2, at(2024, 1, 20, 12, 30, 0), Decimal::from(25), "Meals"),
        credit(3, at(2024, 2, 1, 8, 0, 0), Decimal::from(1000)),
    ]
}
