//! Ledger record domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::transactions::transactions_constants::*;
use crate::utils::time_utils::parse_ledger_date;

/// Closed set of transaction kinds, derived once from the free-text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Purchase,
    Systematic,
    Redeem,
    SwitchOut,
    #[default]
    Unknown, // Label matched none of the known keywords
}

impl TransactionKind {
    /// Normalizes a registrar label into a kind.
    ///
    /// Matching is a case-insensitive substring search with separators removed.
    /// Outflow keywords win over inflow keywords, and "systematic" wins over
    /// "purchase" so that "Systematic Purchase" stays a SIP.
    pub fn from_label(label: &str) -> Self {
        let normalized = normalize_label(label);

        if normalized.contains(LABEL_KEYWORD_REDEEM) {
            TransactionKind::Redeem
        } else if normalized.contains(LABEL_KEYWORD_SWITCH_OUT) {
            TransactionKind::SwitchOut
        } else if normalized.contains(LABEL_KEYWORD_SYSTEMATIC) {
            TransactionKind::Systematic
        } else if normalized.contains(LABEL_KEYWORD_PURCHASE) {
            TransactionKind::Purchase
        } else {
            TransactionKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => TRANSACTION_KIND_PURCHASE,
            TransactionKind::Systematic => TRANSACTION_KIND_SYSTEMATIC,
            TransactionKind::Redeem => TRANSACTION_KIND_REDEEM,
            TransactionKind::SwitchOut => TRANSACTION_KIND_SWITCH_OUT,
            TransactionKind::Unknown => TRANSACTION_KIND_UNKNOWN,
        }
    }

    /// True for kinds whose label alone marks money leaving the scheme.
    pub fn is_outflow_kind(&self) -> bool {
        matches!(self, TransactionKind::Redeem | TransactionKind::SwitchOut)
    }

    /// True for kinds whose label alone marks money entering the scheme.
    pub fn is_inflow_kind(&self) -> bool {
        matches!(self, TransactionKind::Purchase | TransactionKind::Systematic)
    }
}

impl FromStr for TransactionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TransactionKind::from_label(s))
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger line as handed over by the ingestion collaborator.
///
/// Columns follow the ledger order: transaction type, investor name, date,
/// scheme name, units, NAV, value, folio number. The date is still text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionRecord {
    pub transaction_type: String,
    pub investor_name: String,
    pub investment_date: String,
    pub scheme_name: String,
    pub units: Decimal,
    pub nav: Decimal,
    pub value: Decimal,
    #[serde(default)]
    pub folio_number: String,
}

/// Domain model representing one immutable ledger line.
///
/// `kind` is derived from `transaction_type` when the record is built and is
/// what the analytics passes read; the raw label is kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransactionRecord", into = "RawTransactionRecord")]
pub struct TransactionRecord {
    pub transaction_type: String,
    pub kind: TransactionKind,
    pub investor_name: String,
    pub investment_date: NaiveDate,
    pub scheme_name: String,
    pub units: Decimal,
    pub nav: Decimal,
    pub value: Decimal,
    pub folio_number: String,
}

impl TransactionRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_type: impl Into<String>,
        investor_name: impl Into<String>,
        investment_date: NaiveDate,
        scheme_name: impl Into<String>,
        units: Decimal,
        nav: Decimal,
        value: Decimal,
        folio_number: impl Into<String>,
    ) -> Self {
        let transaction_type = transaction_type.into();
        let kind = TransactionKind::from_label(&transaction_type);
        TransactionRecord {
            transaction_type,
            kind,
            investor_name: investor_name.into(),
            investment_date,
            scheme_name: scheme_name.into(),
            units,
            nav,
            value,
            folio_number: folio_number.into(),
        }
    }
}

impl TryFrom<RawTransactionRecord> for TransactionRecord {
    type Error = Error;

    fn try_from(raw: RawTransactionRecord) -> std::result::Result<Self, Self::Error> {
        if raw.scheme_name.trim().is_empty() {
            return Err(ValidationError::MissingField("schemeName".to_string()).into());
        }
        let investment_date = parse_ledger_date(&raw.investment_date)?;

        Ok(TransactionRecord::new(
            raw.transaction_type,
            raw.investor_name,
            investment_date,
            raw.scheme_name,
            raw.units,
            raw.nav,
            raw.value,
            raw.folio_number,
        ))
    }
}

impl From<TransactionRecord> for RawTransactionRecord {
    fn from(record: TransactionRecord) -> Self {
        RawTransactionRecord {
            transaction_type: record.transaction_type,
            investor_name: record.investor_name,
            investment_date: record.investment_date.format("%Y-%m-%d").to_string(),
            scheme_name: record.scheme_name,
            units: record.units,
            nav: record.nav,
            value: record.value,
            folio_number: record.folio_number,
        }
    }
}
