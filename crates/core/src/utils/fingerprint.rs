//! Content fingerprints for memoizing analytics results.
//!
//! Callers hand the engine freshly built vectors on every change, so identity
//! is useless as a cache key. These helpers hash the semantic content of the
//! ledger instead: two ledgers with the same lines in the same order share a key.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::portfolio::view::InvestorSelection;
use crate::transactions::TransactionRecord;

/// Computes a SHA-256 fingerprint of an ordered ledger.
pub fn compute_ledger_fingerprint(records: &[TransactionRecord]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((records.len() as u64).to_le_bytes());
    for record in records {
        update_with_record(&mut hasher, record);
    }
    hex::encode(hasher.finalize())
}

/// Computes the cache key for one overview request.
///
/// The key covers the ledger content, the investor selection, the privilege
/// flag and the valuation date. The selection is tagged by variant, so an
/// investor literally named "all" never shares a key with `All`.
pub fn compute_overview_key(
    records: &[TransactionRecord],
    selection: &InvestorSelection,
    privileged: bool,
    as_of: NaiveDate,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(compute_ledger_fingerprint(records).as_bytes());
    hasher.update(b"|");
    match selection {
        InvestorSelection::All => hasher.update(b"A"),
        InvestorSelection::Investor(name) => {
            hasher.update(b"I:");
            hasher.update(name.as_bytes());
        }
    }
    hasher.update(b"|");
    hasher.update(if privileged { b"1" } else { b"0" });
    hasher.update(b"|");
    hasher.update(as_of.format("%Y-%m-%d").to_string().as_bytes());
    hex::encode(hasher.finalize())
}

fn update_with_record(hasher: &mut Sha256, record: &TransactionRecord) {
    hasher.update(record.transaction_type.as_bytes());
    hasher.update(b"|");
    hasher.update(record.investor_name.as_bytes());
    hasher.update(b"|");
    hasher.update(record.investment_date.format("%Y-%m-%d").to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(record.scheme_name.as_bytes());
    hasher.update(b"|");
    hasher.update(normalize_decimal(record.units).as_bytes());
    hasher.update(b"|");
    hasher.update(normalize_decimal(record.nav).as_bytes());
    hasher.update(b"|");
    hasher.update(normalize_decimal(record.value).as_bytes());
    hasher.update(b"|");
    hasher.update(record.folio_number.as_bytes());
    hasher.update(b"\n");
}

/// Normalize decimal to consistent string format
fn normalize_decimal(d: Decimal) -> String {
    d.normalize().to_string()
}
