//! Card repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::entities::cards;

/// Read access to the cards table.
#[derive(Debug, Clone)]
pub struct CardRepository {
    db: DatabaseConnection,
}

impl CardRepository {
    /// Creates a new card repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a card by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<cards::Model>, DbErr> {
        cards::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists every card by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<cards::Model>, DbErr> {
        cards::Entity::find()
            .order_by_asc(cards::Column::CardName)
            .all(&self.db)
            .await
    }
}
