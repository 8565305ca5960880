//! Narrows the ledger to the selected investor and decides whether money
//! figures may be shown.

use super::{InvestorSelection, PortfolioView};
use crate::transactions::TransactionRecord;

/// Filters `all` by investor and sets the redaction flag for unprivileged
/// viewers. Records are copied unchanged; redaction is applied to derived
/// aggregates, never to the records themselves.
pub fn select_view(
    all: &[TransactionRecord],
    selection: &InvestorSelection,
    privileged: bool,
) -> PortfolioView {
    let records = match selection {
        InvestorSelection::All => all.to_vec(),
        InvestorSelection::Investor(_) => all
            .iter()
            .filter(|record| selection.matches(record))
            .cloned()
            .collect(),
    };

    PortfolioView {
        records,
        zero_pnl: !privileged,
    }
}
