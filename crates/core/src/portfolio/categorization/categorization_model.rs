use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionRecord;

/// Totals for one investor across every scheme they touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorSummary {
    pub investor_name: String,
    pub total_investment: Decimal,
    pub total_redemption: Decimal,
    pub net_investment: Decimal,
    pub transaction_count: usize,
    /// Number of distinct schemes in the investor's ledger lines
    pub schemes_invested: usize,
}

/// Totals for one scheme across every investor.
///
/// Unlike `SchemeAggregate`, investment and redemption are kept as separate
/// running totals, and fully redeemed schemes are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeSummary {
    pub scheme_name: String,
    pub total_units: Decimal,
    pub total_investment: Decimal,
    pub total_redemption: Decimal,
    pub net_investment: Decimal,
    pub latest_nav: Decimal,
    pub current_value: Decimal,
    pub returns: Decimal,
    pub return_percent: Decimal,
    pub transaction_count: usize,
    /// Number of distinct investors with ledger lines in the scheme
    pub total_investors: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseSubtype {
    Purchase,
    Systematic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RedeemSubtype {
    Redeem,
    SwitchOut,
}

/// A ledger line that bought units, tagged lump-sum or SIP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTransaction {
    pub subtype: PurchaseSubtype,
    pub transaction: TransactionRecord,
}

/// A ledger line that sold or switched out units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemTransaction {
    pub subtype: RedeemSubtype,
    pub transaction: TransactionRecord,
}
