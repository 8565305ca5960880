use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::categorization::{
    InvestorSummary, PurchaseTransaction, RedeemTransaction, SchemeSummary,
};
use crate::portfolio::holdings::SchemeAggregate;
use crate::portfolio::view::Redact;

/// Everything a dashboard needs for one investor selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    /// `"all"` or the selected investor name
    pub investor: String,
    pub as_of: NaiveDate,
    /// Money figures below were zeroed for an unprivileged viewer
    pub zero_pnl: bool,

    // Totals over schemes still held
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub total_returns: Decimal,
    pub return_percent: Decimal,
    /// Annualized money-weighted return in percent; None when unavailable
    pub xirr: Option<Decimal>,
    pub scheme_count: usize,

    pub holdings: Vec<SchemeAggregate>,
    pub investors: Vec<InvestorSummary>,
    pub schemes: Vec<SchemeSummary>,
    pub purchases: Vec<PurchaseTransaction>,
    pub redemptions: Vec<RedeemTransaction>,
}

impl Redact for PortfolioOverview {
    fn redact(&mut self) {
        self.zero_pnl = true;
        self.total_invested = Decimal::ZERO;
        self.current_value = Decimal::ZERO;
        self.total_returns = Decimal::ZERO;
        self.return_percent = Decimal::ZERO;
        self.xirr = None;
        self.holdings.redact();
        self.investors.redact();
        self.schemes.redact();
    }
}
