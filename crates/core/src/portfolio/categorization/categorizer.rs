//! Cohort views over the ledger: per investor, per scheme, and tagged
//! purchase / redemption lists.
//!
//! Groups are collected in first-seen order and then stable-sorted, so equal
//! sort keys keep ledger order.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::{
    InvestorSummary, PurchaseSubtype, PurchaseTransaction, RedeemSubtype, RedeemTransaction,
    SchemeSummary,
};
use crate::portfolio::performance::{
    calculate_return_percent, classify_record, signed_units, FlowDirection,
};
use crate::transactions::{TransactionKind, TransactionRecord};
use crate::utils::decimal_utils::{add_or_keep, mul_or_zero, sub_or_zero};

/// Folds records by investor name (trimmed). Lines without a name are skipped.
/// Sorted by net investment, highest first.
pub fn categorize_users(records: &[TransactionRecord]) -> Vec<InvestorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<InvestorSummary> = Vec::new();
    let mut schemes: Vec<HashSet<&str>> = Vec::new();

    for record in records {
        let name = record.investor_name.trim();
        if name.is_empty() {
            continue;
        }

        let slot = *index.entry(name).or_insert_with(|| {
            summaries.push(InvestorSummary {
                investor_name: name.to_string(),
                total_investment: Decimal::ZERO,
                total_redemption: Decimal::ZERO,
                net_investment: Decimal::ZERO,
                transaction_count: 0,
                schemes_invested: 0,
            });
            schemes.push(HashSet::new());
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        match classify_record(record) {
            FlowDirection::Inflow => {
                summary.total_investment =
                    add_or_keep(summary.total_investment, record.value.abs(), "investor inflow")
            }
            FlowDirection::Outflow => {
                summary.total_redemption =
                    add_or_keep(summary.total_redemption, record.value.abs(), "investor outflow")
            }
        }
        summary.transaction_count += 1;
        schemes[slot].insert(record.scheme_name.as_str());
    }

    for (summary, scheme_names) in summaries.iter_mut().zip(schemes) {
        summary.net_investment = summary.total_investment - summary.total_redemption;
        summary.schemes_invested = scheme_names.len();
    }

    summaries.sort_by(|a, b| b.net_investment.cmp(&a.net_investment));
    summaries
}

/// Folds records by scheme, tracking investment and redemption separately.
/// Fully redeemed schemes are kept. Sorted by net investment, highest first.
pub fn categorize_mutual_funds(records: &[TransactionRecord]) -> Vec<SchemeSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<SchemeSummary> = Vec::new();
    let mut investors: Vec<HashSet<&str>> = Vec::new();

    for record in records {
        let slot = *index.entry(record.scheme_name.as_str()).or_insert_with(|| {
            summaries.push(SchemeSummary {
                scheme_name: record.scheme_name.clone(),
                total_units: Decimal::ZERO,
                total_investment: Decimal::ZERO,
                total_redemption: Decimal::ZERO,
                net_investment: Decimal::ZERO,
                latest_nav: Decimal::ZERO,
                current_value: Decimal::ZERO,
                returns: Decimal::ZERO,
                return_percent: Decimal::ZERO,
                transaction_count: 0,
                total_investors: 0,
            });
            investors.push(HashSet::new());
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        match classify_record(record) {
            FlowDirection::Inflow => {
                summary.total_investment =
                    add_or_keep(summary.total_investment, record.value.abs(), "scheme inflow")
            }
            FlowDirection::Outflow => {
                summary.total_redemption =
                    add_or_keep(summary.total_redemption, record.value.abs(), "scheme outflow")
            }
        }
        summary.total_units = add_or_keep(summary.total_units, signed_units(record), "scheme units");
        summary.latest_nav = record.nav;
        summary.transaction_count += 1;

        let investor = record.investor_name.trim();
        if !investor.is_empty() {
            investors[slot].insert(investor);
        }
    }

    for (summary, investor_names) in summaries.iter_mut().zip(investors) {
        summary.net_investment = summary.total_investment - summary.total_redemption;
        summary.current_value =
            mul_or_zero(summary.total_units, summary.latest_nav, "scheme value");
        summary.returns =
            sub_or_zero(summary.current_value, summary.net_investment, "scheme returns");
        summary.return_percent = calculate_return_percent(summary.returns, summary.net_investment);
        summary.total_investors = investor_names.len();
    }

    summaries.sort_by(|a, b| b.net_investment.cmp(&a.net_investment));
    summaries
}

/// Inflow lines that actually bought units, newest first.
pub fn categorize_purchases(records: &[TransactionRecord]) -> Vec<PurchaseTransaction> {
    let mut purchases: Vec<PurchaseTransaction> = records
        .iter()
        .filter(|record| classify_record(record).is_inflow() && record.units > Decimal::ZERO)
        .map(|record| PurchaseTransaction {
            subtype: if record.kind == TransactionKind::Systematic {
                PurchaseSubtype::Systematic
            } else {
                PurchaseSubtype::Purchase
            },
            transaction: record.clone(),
        })
        .collect();

    purchases.sort_by(|a, b| {
        b.transaction
            .investment_date
            .cmp(&a.transaction.investment_date)
    });
    purchases
}

/// Outflow lines (redemptions and switch-outs), newest first.
pub fn categorize_redemptions(records: &[TransactionRecord]) -> Vec<RedeemTransaction> {
    let mut redemptions: Vec<RedeemTransaction> = records
        .iter()
        .filter(|record| classify_record(record).is_outflow())
        .map(|record| RedeemTransaction {
            subtype: if record.kind == TransactionKind::SwitchOut {
                RedeemSubtype::SwitchOut
            } else {
                RedeemSubtype::Redeem
            },
            transaction: record.clone(),
        })
        .collect();

    redemptions.sort_by(|a, b| {
        b.transaction
            .investment_date
            .cmp(&a.transaction.investment_date)
    });
    redemptions
}
