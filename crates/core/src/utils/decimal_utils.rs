//! Overflow-tolerant decimal arithmetic for ledger aggregation.
//!
//! `rust_decimal` panics when a sum or product leaves its 96-bit range. The
//! aggregators go through these helpers instead, which log the overflow and
//! fall back to a defined value.

use log::warn;
use rust_decimal::Decimal;

/// Adds `amount` to a running `total`. On overflow the contribution is
/// dropped and the previous total kept.
pub fn add_or_keep(total: Decimal, amount: Decimal, context: &str) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!(
            "Decimal overflow accumulating {}: {} + {}, contribution skipped",
            context, total, amount
        );
        total
    })
}

/// `a - b`, or zero on overflow.
pub fn sub_or_zero(a: Decimal, b: Decimal, context: &str) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        warn!("Decimal overflow computing {}: {} - {}", context, a, b);
        Decimal::ZERO
    })
}

/// `a * b`, or zero on overflow.
pub fn mul_or_zero(a: Decimal, b: Decimal, context: &str) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!("Decimal overflow computing {}: {} * {}", context, a, b);
        Decimal::ZERO
    })
}
