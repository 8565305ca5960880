//! Transactions module - ledger records and the transaction-type vocabulary.

mod transactions_constants;
mod transactions_model;


pub use transactions_constants::*;
pub use transactions_model::{RawTransactionRecord, TransactionKind, TransactionRecord};
