//! `SeaORM` entity definitions.

pub mod cards;
pub mod transactions;

pub mod prelude {
    //! Re-exports of every entity.
    pub use super::cards::Entity as Cards;
    pub use super::transactions::Entity as Transactions;
}
