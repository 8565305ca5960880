use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::ALL_INVESTORS;
use crate::transactions::TransactionRecord;

/// Which investor's ledger a view covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestorSelection {
    All,
    Investor(String),
}

impl InvestorSelection {
    /// Stable textual key, `"all"` or the investor name.
    pub fn as_key(&self) -> &str {
        match self {
            InvestorSelection::All => ALL_INVESTORS,
            InvestorSelection::Investor(name) => name,
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            InvestorSelection::All => true,
            InvestorSelection::Investor(name) => record.investor_name == *name,
        }
    }
}

impl From<&str> for InvestorSelection {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_INVESTORS) {
            InvestorSelection::All
        } else {
            InvestorSelection::Investor(value.to_string())
        }
    }
}

impl FromStr for InvestorSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InvestorSelection::from(s))
    }
}

impl fmt::Display for InvestorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// The slice of the ledger a caller may see, plus the display policy.
///
/// `zero_pnl` asks downstream aggregation to report money figures as zero
/// while keeping names, counts and transaction lists.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub records: Vec<TransactionRecord>,
    pub zero_pnl: bool,
}
