//! Report aggregation and export engine for Cardledger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The row store is reached only through the [`store::RowStore`] trait.
//!
//! # Modules
//!
//! - `records` - Strict transaction and card shapes validated at the boundary
//! - `filter` - Request parameters resolved into one shared row predicate
//! - `reports` - Monthly credit/debit buckets and per-category expense totals
//! - `export` - Delimited text, workbook, and paginated document renderers
//! - `store` - Read-only row store seam and an in-memory implementation

pub mod export;
pub mod filter;
pub mod records;
pub mod reports;
pub mod store;

#[cfg(test)]
mod testing;
