//! Flow classification for mutual-fund ledgers.
//!
//! Every ledger line either puts money into a scheme (purchase, SIP) or takes
//! it out (redemption, switch-out). Aggregation, categorization and XIRR all
//! read the direction from here.

use rust_decimal::Decimal;

use crate::transactions::{TransactionKind, TransactionRecord};

/// Direction of a ledger line from the scheme's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Units bought; money leaves the investor
    Inflow,

    /// Units sold or switched out; money returns to the investor
    Outflow,
}

impl FlowDirection {
    pub fn is_inflow(&self) -> bool {
        *self == FlowDirection::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        *self == FlowDirection::Outflow
    }
}

/// Classify a normalized transaction kind with its unit count.
///
/// Precedence:
/// 1. REDEEM / SWITCH_OUT, or negative units -> Outflow
/// 2. PURCHASE / SYSTEMATIC -> Inflow
/// 3. otherwise the unit sign decides (already non-negative here), so
///    zero units with an unknown label count as Inflow
pub fn classify(kind: TransactionKind, units: Decimal) -> FlowDirection {
    if kind.is_outflow_kind() || units < Decimal::ZERO {
        return FlowDirection::Outflow;
    }

    // PURCHASE / SYSTEMATIC, or unknown vocabulary with non-negative units
    FlowDirection::Inflow
}

/// Classify a raw registrar label. Prefer `classify_record` on built records,
/// which reuses the kind derived at ingestion.
pub fn classify_label(transaction_type: &str, units: Decimal) -> FlowDirection {
    classify(TransactionKind::from_label(transaction_type), units)
}

/// Classify a ledger record.
pub fn classify_record(record: &TransactionRecord) -> FlowDirection {
    classify(record.kind, record.units)
}

/// Units contributed to the scheme: `|units|` for inflows, `-|units|` for outflows.
pub fn signed_units(record: &TransactionRecord) -> Decimal {
    match classify_record(record) {
        FlowDirection::Inflow => record.units.abs(),
        FlowDirection::Outflow => -record.units.abs(),
    }
}

/// Money contributed to the scheme: `|value|` for inflows, `-|value|` for outflows.
pub fn signed_value(record: &TransactionRecord) -> Decimal {
    match classify_record(record) {
        FlowDirection::Inflow => record.value.abs(),
        FlowDirection::Outflow => -record.value.abs(),
    }
}
