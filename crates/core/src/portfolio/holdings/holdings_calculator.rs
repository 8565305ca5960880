//! Folds a ledger into per-scheme holdings.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::SchemeAggregate;
use crate::constants::QUANTITY_THRESHOLD;
use crate::portfolio::performance::{calculate_return_percent, signed_units, signed_value};
use crate::transactions::TransactionRecord;
use crate::utils::decimal_utils::{add_or_keep, mul_or_zero, sub_or_zero};

/// Running totals for one scheme while folding.
#[derive(Default)]
struct SchemeAccumulator {
    total_units: Decimal,
    total_invested: Decimal,
    latest_nav: Decimal,
    transactions: Vec<TransactionRecord>,
}

/// Aggregates records into schemes still held (net units above zero).
///
/// `latest_nav` is the NAV of the last record seen for each scheme in input
/// order. Pass records through `sort_chronologically` first when the ledger
/// is not already in date order.
pub fn aggregate_schemes(records: &[TransactionRecord]) -> Vec<SchemeAggregate> {
    aggregate_holdings(records, Decimal::ZERO)
}

/// Aggregates records, dropping schemes whose net units are at or below
/// `unit_threshold`. The portfolio view uses `default_unit_threshold()` to
/// absorb rounding dust left by full redemptions.
pub fn aggregate_holdings(
    records: &[TransactionRecord],
    unit_threshold: Decimal,
) -> Vec<SchemeAggregate> {
    let mut schemes: HashMap<&str, SchemeAccumulator> = HashMap::new();

    for record in records {
        let entry = schemes.entry(record.scheme_name.as_str()).or_default();
        entry.total_units = add_or_keep(entry.total_units, signed_units(record), "scheme units");
        entry.total_invested =
            add_or_keep(entry.total_invested, signed_value(record), "scheme invested");
        entry.latest_nav = record.nav;
        entry.transactions.push(record.clone());
    }

    let mut aggregates: Vec<SchemeAggregate> = schemes
        .into_iter()
        .filter(|(_, acc)| acc.total_units > unit_threshold)
        .map(|(scheme_name, acc)| {
            let current_value = mul_or_zero(acc.total_units, acc.latest_nav, "scheme value");
            let returns = sub_or_zero(current_value, acc.total_invested, "scheme returns");
            SchemeAggregate {
                scheme_name: scheme_name.to_string(),
                total_units: acc.total_units,
                total_invested: acc.total_invested,
                latest_nav: acc.latest_nav,
                current_value,
                returns,
                return_percent: calculate_return_percent(returns, acc.total_invested),
                transactions: acc.transactions,
            }
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.current_value
            .cmp(&a.current_value)
            .then_with(|| a.scheme_name.cmp(&b.scheme_name))
    });
    aggregates
}

/// Unit threshold below which the portfolio view treats a scheme as redeemed.
pub fn default_unit_threshold() -> Decimal {
    Decimal::from_str(QUANTITY_THRESHOLD).unwrap_or(Decimal::ZERO)
}

/// Returns the records ordered by investment date. The sort is stable, so
/// lines sharing a date keep their ledger order.
pub fn sort_chronologically(records: &[TransactionRecord]) -> Vec<TransactionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.investment_date);
    sorted
}
