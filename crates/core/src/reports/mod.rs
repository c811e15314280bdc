//! Report aggregation.
//!
//! Derived views computed fresh from a filtered row set:
//! - Monthly credit/debit buckets keyed `YYYY-MM`
//! - Per-category expense totals (debits only)
//! - Sum of card balances

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::ReportService;
pub use types::*;
