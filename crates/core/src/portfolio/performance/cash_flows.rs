//! Builds XIRR cash-flow series from ledger records.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::flow_classifier::signed_value;
use super::performance_model::CashFlowEvent;
use crate::transactions::TransactionRecord;
use crate::utils::time_utils::start_of_day;

/// Converts ledger records into investor cash flows and appends the synthetic
/// terminal valuation.
///
/// - inflow records (purchases, SIPs) become `-|value|`
/// - outflow records (redemptions, switch-outs) become `+|value|`
/// - zero-value records are skipped
/// - `terminal_value`, when positive, is added as a final `+` flow on `as_of`,
///   as if the remaining units were liquidated that day
pub fn build_cash_flows(
    records: &[TransactionRecord],
    terminal_value: Decimal,
    as_of: NaiveDate,
) -> Vec<CashFlowEvent> {
    let mut events: Vec<CashFlowEvent> = records
        .iter()
        .filter(|record| !record.value.is_zero())
        .map(|record| {
            CashFlowEvent::new(start_of_day(record.investment_date), -signed_value(record))
        })
        .collect();

    if terminal_value > Decimal::ZERO {
        events.push(CashFlowEvent::new(start_of_day(as_of), terminal_value));
    }

    events
}

/// True when the series has at least two events and both signs occur.
/// A series without a sign change has no rate that zeroes its NPV.
pub fn has_sign_change(events: &[CashFlowEvent]) -> bool {
    if events.len() < 2 {
        return false;
    }
    let has_negative = events.iter().any(|e| e.amount < Decimal::ZERO);
    let has_positive = events.iter().any(|e| e.amount > Decimal::ZERO);
    has_negative && has_positive
}
