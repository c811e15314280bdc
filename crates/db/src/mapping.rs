//! Boundary validation of loose database rows into strict records.

use chrono::Utc;
use cardledger_core::records::{CardRecord, CardRef, RecordError, TransactionRecord};
use cardledger_shared::types::{CardId, TransactionId};

use crate::entities::{cards, transactions};

/// Validates a card row.
///
/// # Errors
///
/// Returns [`RecordError::MalformedCardNumber`] if the number is not all digits.
pub fn card_record(model: cards::Model) -> Result<CardRecord, RecordError> {
    CardRecord {
        id: CardId::from_uuid(model.id),
        last4: model.card_number,
        name: model.card_name,
        department: model.department,
        balance: model.current_balance,
    }
    .validate()
}

/// Validates a transaction row joined with its card, if the card exists.
///
/// # Errors
///
/// Returns [`RecordError`] if the type is unknown or the amount is not positive.
pub fn transaction_record(
    model: transactions::Model,
    card: Option<cards::Model>,
) -> Result<TransactionRecord, RecordError> {
    let mut card_ref = CardRef::bare(CardId::from_uuid(model.card_id));
    if let Some(card) = card {
        card_ref.name = Some(card.card_name);
        card_ref.last4 = Some(card.card_number);
    }

    TransactionRecord {
        id: TransactionId::from_uuid(model.id),
        kind: model.kind.parse()?,
        amount: model.amount,
        occurred_at: model.transaction_date.with_timezone(&Utc),
        category: model.category,
        vendor: model.vendor_name,
        counterparty: model.client_partner_name,
        description: model.description,
        card: card_ref,
    }
    .validate()
}
