use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PRECISION;

/// A dated, signed cash flow as seen by the investor.
///
/// Purchases are negative (money leaves the investor); redemptions and the
/// terminal valuation are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEvent {
    pub date: NaiveDateTime,
    pub amount: Decimal,
}

impl CashFlowEvent {
    pub fn new(date: NaiveDateTime, amount: Decimal) -> Self {
        CashFlowEvent { date, amount }
    }
}

/// Simple return as a percentage of the amount invested.
///
/// Returns zero when nothing (or a negative net amount) is invested, so a
/// fully redeemed or empty position never divides by zero. A ratio too large
/// to represent is also reported as zero.
pub fn calculate_return_percent(returns: Decimal, invested: Decimal) -> Decimal {
    if invested <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    returns
        .checked_div(invested)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp(DECIMAL_PRECISION))
        .unwrap_or(Decimal::ZERO)
}
