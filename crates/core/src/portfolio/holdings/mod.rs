//! Holdings module - per-scheme aggregation of the ledger.

mod holdings_calculator;
mod holdings_model;


pub use holdings_calculator::{
    aggregate_holdings, aggregate_schemes, default_unit_threshold, sort_chronologically,
};
pub use holdings_model::*;
