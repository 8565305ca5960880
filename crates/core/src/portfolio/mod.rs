//! Portfolio analytics - classification, aggregation, cohorts, XIRR and views.

pub mod categorization;
pub mod holdings;
pub mod overview;
pub mod performance;
pub mod view;
