//! Read-only access to the card and transaction collections.
//!
//! The engine never mutates the store. Every read takes the resolved
//! [`TransactionFilter`] so listing, reports, and exports select the same rows.

use async_trait::async_trait;
use thiserror::Error;
use cardledger_shared::AppError;
use cardledger_shared::types::{CardId, RowWindow};

use crate::filter::TransactionFilter;
use crate::records::{CardRecord, RecordError, TransactionRecord};

/// Errors raised by a row store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying read failed.
    #[error("{0}")]
    Read(String),

    /// A row did not pass boundary validation.
    #[error("invalid row: {0}")]
    InvalidRow(#[from] RecordError),
}

impl StoreError {
    /// Create a read error.
    #[must_use]
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::StoreFailure(err.to_string())
    }
}

/// Filtered, ordered read access over cards and transactions.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Returns matching transactions ordered by `occurred_at` descending,
    /// with card name and number joined in.
    ///
    /// `None` returns every matching row.
    async fn fetch_transactions(
        &self,
        filter: &TransactionFilter,
        window: Option<RowWindow>,
    ) -> Result<Vec<TransactionRecord>, StoreError>;

    /// Counts matching transactions.
    async fn count_transactions(&self, filter: &TransactionFilter) -> Result<u64, StoreError>;

    /// Point lookup of one card.
    async fn find_card(&self, id: CardId) -> Result<Option<CardRecord>, StoreError>;

    /// Returns every card.
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>, StoreError>;
}

/// Row store backed by vectors, used by tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowStore {
    cards: Vec<CardRecord>,
    transactions: Vec<TransactionRecord>,
    failure: Option<String>,
}

impl InMemoryRowStore {
    /// Creates a store holding the given rows.
    #[must_use]
    pub const fn new(cards: Vec<CardRecord>, transactions: Vec<TransactionRecord>) -> Self {
        Self {
            cards,
            transactions,
            failure: None,
        }
    }

    /// Creates a store whose every read fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(msg) => Err(StoreError::read(msg.clone())),
            None => Ok(()),
        }
    }

    fn joined(&self, record: &TransactionRecord) -> TransactionRecord {
        let mut record = record.clone();
        if let Some(card) = self.cards.iter().find(|c| c.id == record.card.id) {
            record.card.name = Some(card.name.clone());
            record.card.last4 = Some(card.last4.clone());
        }
        record
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn fetch_transactions(
        &self,
        filter: &TransactionFilter,
        window: Option<RowWindow>,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        self.check()?;

        let mut rows: Vec<TransactionRecord> = self
            .transactions
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| self.joined(r))
            .collect();
        rows.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        Ok(match window {
            Some(w) => {
                let skip = usize::try_from(w.offset).unwrap_or(usize::MAX);
                let take = usize::try_from(w.limit).unwrap_or(usize::MAX);
                rows.into_iter().skip(skip).take(take).collect()
            }
            None => rows,
        })
    }

    async fn count_transactions(&self, filter: &TransactionFilter) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.transactions.iter().filter(|r| filter.matches(r)).count() as u64)
    }

    async fn find_card(&self, id: CardId) -> Result<Option<CardRecord>, StoreError> {
        self.check()?;
        Ok(self.cards.iter().find(|c| c.id == id).cloned())
    }

    async fn fetch_cards(&self) -> Result<Vec<CardRecord>, StoreError> {
        self.check()?;
        Ok(self.cards.clone())
    }
}
