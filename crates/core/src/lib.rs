//! Navfolio Core - mutual-fund portfolio analytics.
//!
//! This crate turns an in-memory ledger of mutual-fund transactions into
//! per-scheme holdings, investor and scheme cohorts, and a money-weighted
//! annualized return (XIRR). It performs no I/O: records come in already
//! parsed, and every result is a plain value recomputed from them.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod settings;
pub mod transactions;
pub mod utils;

// Re-export common types from the portfolio and transactions modules
pub use portfolio::categorization::*;
pub use portfolio::holdings::*;
pub use portfolio::overview::*;
pub use portfolio::performance::*;
pub use portfolio::view::*;
pub use transactions::{RawTransactionRecord, TransactionKind, TransactionRecord};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
