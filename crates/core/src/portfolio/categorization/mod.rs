//! Categorization module - investor and scheme cohorts, purchase and
//! redemption lists.

mod categorization_model;
mod categorizer;


pub use categorization_model::*;
pub use categorizer::{
    categorize_mutual_funds, categorize_purchases, categorize_redemptions, categorize_users,
};
