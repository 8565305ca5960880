//! Overview module - the whole analytics pipeline for one logical view.

mod overview_model;
mod overview_service;

#[cfg(test)]
mod overview_service_tests;

pub use overview_model::*;
pub use overview_service::{AnalyticsService, AnalyticsServiceTrait};
