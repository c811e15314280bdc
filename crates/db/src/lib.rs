//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for cards and transactions
//! - Repository abstractions for data access
//! - Boundary validation into strict core records
//! - [`PgRowStore`], the PostgreSQL row store

pub mod entities;
pub mod mapping;
pub mod repositories;
pub mod store;

pub use repositories::{CardRepository, TransactionRepository};
pub use store::PgRowStore;

use cardledger_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);
    Database::connect(options).await
}
