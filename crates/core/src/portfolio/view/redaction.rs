//! Monetary redaction for unprivileged views.
//!
//! Redaction zeroes money figures (and the unit/NAV pair that would let a
//! reader rebuild them) on derived aggregates. Names, counts and transaction
//! lists are left as they are.

use rust_decimal::Decimal;

use crate::portfolio::categorization::{InvestorSummary, SchemeSummary};
use crate::portfolio::holdings::SchemeAggregate;

/// Zeroes the monetary fields of a derived aggregate in place.
pub trait Redact {
    fn redact(&mut self);
}

impl<T: Redact> Redact for Vec<T> {
    fn redact(&mut self) {
        self.iter_mut().for_each(Redact::redact);
    }
}

impl Redact for SchemeAggregate {
    fn redact(&mut self) {
        self.total_units = Decimal::ZERO;
        self.total_invested = Decimal::ZERO;
        self.latest_nav = Decimal::ZERO;
        self.current_value = Decimal::ZERO;
        self.returns = Decimal::ZERO;
        self.return_percent = Decimal::ZERO;
    }
}

impl Redact for InvestorSummary {
    fn redact(&mut self) {
        self.total_investment = Decimal::ZERO;
        self.total_redemption = Decimal::ZERO;
        self.net_investment = Decimal::ZERO;
    }
}

impl Redact for SchemeSummary {
    fn redact(&mut self) {
        self.total_units = Decimal::ZERO;
        self.total_investment = Decimal::ZERO;
        self.total_redemption = Decimal::ZERO;
        self.net_investment = Decimal::ZERO;
        self.latest_nav = Decimal::ZERO;
        self.current_value = Decimal::ZERO;
        self.returns = Decimal::ZERO;
        self.return_percent = Decimal::ZERO;
    }
}
