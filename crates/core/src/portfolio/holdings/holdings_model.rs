use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionRecord;

/// Net position in one scheme, folded from every ledger line naming it.
///
/// `current_value = total_units * latest_nav`,
/// `returns = current_value - total_invested`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemeAggregate {
    pub scheme_name: String,
    pub total_units: Decimal,
    /// Purchases minus redemptions, at transaction value
    pub total_invested: Decimal,
    /// NAV of the last ledger line processed for the scheme
    pub latest_nav: Decimal,
    pub current_value: Decimal,
    pub returns: Decimal,
    pub return_percent: Decimal,
    pub transactions: Vec<TransactionRecord>,
}
