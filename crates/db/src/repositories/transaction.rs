//! Transaction repository.
//!
//! Translates a resolved [`TransactionFilter`] into SQL so the database
//! selects exactly the rows the in-process predicate would.

use cardledger_core::filter::TransactionFilter;
use cardledger_shared::types::RowWindow;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::entities::{cards, transactions};

/// Read access to the transactions table.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the filtered select, newest first.
    #[must_use]
    pub fn filtered(filter: &TransactionFilter) -> Select<transactions::Entity> {
        let mut query = transactions::Entity::find();

        if let Some(from) = filter.occurred_from {
            query = query.filter(transactions::Column::TransactionDate.gte(from));
        }

        if let Some(until) = filter.occurred_until {
            query = query.filter(transactions::Column::TransactionDate.lte(until));
        }

        if let Some(card_id) = filter.card_id {
            query = query.filter(transactions::Column::CardId.eq(card_id.into_inner()));
        }

        if let Some(kind) = filter.kind {
            query = query.filter(transactions::Column::Kind.eq(kind.as_str()));
        }

        if let Some(term) = &filter.search {
            query = query.filter(search_condition(term));
        }

        query
            .order_by_desc(transactions::Column::TransactionDate)
            .order_by_desc(transactions::Column::CreatedAt)
    }

    /// Fetches matching rows with their card, optionally windowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_matching(
        &self,
        filter: &TransactionFilter,
        window: Option<RowWindow>,
    ) -> Result<Vec<(transactions::Model, Option<cards::Model>)>, DbErr> {
        let mut query = Self::filtered(filter);
        if let Some(window) = window {
            query = query.offset(window.offset).limit(window.limit);
        }
        query.find_also_related(cards::Entity).all(&self.db).await
    }

    /// Counts matching rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_matching(&self, filter: &TransactionFilter) -> Result<u64, DbErr> {
        Self::filtered(filter).count(&self.db).await
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
#[must_use]
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match OR'd across vendor, counterparty, and
/// description.
fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    [
        transactions::Column::VendorName,
        transactions::Column::ClientPartnerName,
        transactions::Column::Description,
    ]
    .into_iter()
    .fold(Condition::any(), |condition, column| {
        condition.add(
            Expr::expr(Func::lower(Expr::col((transactions::Entity, column))))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    })
}
