//! PostgreSQL implementation of the row store.

use async_trait::async_trait;
use cardledger_core::filter::TransactionFilter;
use cardledger_core::records::{CardRecord, TransactionRecord};
use cardledger_core::store::{RowStore, StoreError};
use cardledger_shared::types::{CardId, RowWindow};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::{debug, error};

use crate::mapping::{card_record, transaction_record};
use crate::repositories::{CardRepository, TransactionRepository};

/// Row store reading cards and transactions through `SeaORM`.
#[derive(Debug, Clone)]
pub struct PgRowStore {
    cards: CardRepository,
    transactions: TransactionRepository,
}

impl PgRowStore {
    /// Creates a store over an open connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cards: CardRepository::new(db.clone()),
            transactions: TransactionRepository::new(db),
        }
    }
}

fn read_failed(operation: &'static str) -> impl FnOnce(DbErr) -> StoreError {
    move |e| {
        error!(error = %e, operation, "Row store read failed");
        StoreError::read(e.to_string())
    }
}

fn invalid_row(e: cardledger_core::records::RecordError) -> StoreError {
    error!(error = %e, "Row failed validation");
    StoreError::InvalidRow(e)
}

#[async_trait]
impl RowStore for PgRowStore {
    async fn fetch_transactions(
        &self,
        filter: &TransactionFilter,
        window: Option<RowWindow>,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let rows = self
            .transactions
            .find_matching(filter, window)
            .await
            .map_err(read_failed("fetch_transactions"))?;
        debug!(rows = rows.len(), ?window, "Fetched transactions");

        rows.into_iter()
            .map(|(tx, card)| transaction_record(tx, card).map_err(invalid_row))
            .collect()
    }

    async fn count_transactions(&self, filter: &TransactionFilter) -> Result<u64, StoreError> {
        self.transactions
            .count_matching(filter)
            .await
            .map_err(read_failed("count_transactions"))
    }

    async fn find_card(&self, id: CardId) -> Result<Option<CardRecord>, StoreError> {
        self.cards
            .find_by_id(id.into_inner())
            .await
            .map_err(read_failed("find_card"))?
            .map(|card| card_record(card).map_err(invalid_row))
            .transpose()
    }

    async fn fetch_cards(&self) -> Result<Vec<CardRecord>, StoreError> {
        self.cards
            .list_all()
            .await
            .map_err(read_failed("fetch_cards"))?
            .into_iter()
            .map(|card| card_record(card).map_err(invalid_row))
            .collect()
    }
}
