//! Strict record shapes read from the row store.
//!
//! Rows arrive loosely typed; they are validated once, here, and every
//! downstream consumer works with these types only.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use cardledger_shared::types::{CardId, TransactionId};

/// Label used when a transaction carries no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Errors raised while validating a raw row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Transaction type is neither `credit` nor `debit`.
    #[error("Unknown transaction kind: {0}")]
    InvalidKind(String),

    /// Transaction amount is zero or negative.
    #[error("Transaction {id} has non-positive amount {amount}")]
    NonPositiveAmount {
        /// Offending transaction.
        id: TransactionId,
        /// The amount read from the store.
        amount: Decimal,
    },

    /// Card number contains something other than digits.
    #[error("Card {id} has malformed number {number:?}")]
    MalformedCardNumber {
        /// Offending card.
        id: CardId,
        /// The number read from the store.
        number: String,
    },
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (income).
    Credit,
    /// Money going out (expense).
    Debit,
}

impl TransactionKind {
    /// Returns the wire token for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(RecordError::InvalidKind(s.to_string())),
        }
    }
}

/// Reference from a transaction to its card, with the joined display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    /// Card ID.
    pub id: CardId,
    /// Card name, when the join found the card.
    pub name: Option<String>,
    /// Card number digits, when the join found the card.
    pub last4: Option<String>,
}

impl CardRef {
    /// Creates a reference with no joined display fields.
    #[must_use]
    pub const fn bare(id: CardId) -> Self {
        Self {
            id,
            name: None,
            last4: None,
        }
    }
}

/// A single card transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction ID.
    pub id: TransactionId,
    /// Credit or debit.
    pub kind: TransactionKind,
    /// Positive amount.
    pub amount: Decimal,
    /// When the transaction happened.
    pub occurred_at: DateTime<Utc>,
    /// Expense category.
    pub category: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Client or partner name.
    pub counterparty: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Card the transaction was made with.
    pub card: CardRef,
}

impl TransactionRecord {
    /// Checks record invariants and collapses blank optional text to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NonPositiveAmount`] if `amount <= 0`.
    pub fn validate(mut self) -> Result<Self, RecordError> {
        if self.amount <= Decimal::ZERO {
            return Err(RecordError::NonPositiveAmount {
                id: self.id,
                amount: self.amount,
            });
        }
        self.category = non_blank(self.category);
        self.vendor = non_blank(self.vendor);
        self.counterparty = non_blank(self.counterparty);
        self.description = non_blank(self.description);
        Ok(self)
    }

    /// Category used for grouping; blank or absent maps to [`UNCATEGORIZED`].
    #[must_use]
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }
}

/// A payment card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card ID.
    pub id: CardId,
    /// Trailing card number digits.
    pub last4: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    pub department: Option<String>,
    /// Current balance.
    pub balance: Decimal,
}

impl CardRecord {
    /// Checks that the card number is made of digits only.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MalformedCardNumber`] otherwise.
    pub fn validate(self) -> Result<Self, RecordError> {
        if self.last4.is_empty() || !self.last4.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::MalformedCardNumber {
                id: self.id,
                number: self.last4,
            });
        }
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
