/// Transaction label vocabulary
///
/// Ledger rows carry a free-text transaction type. These are the fragments the
/// normalizer looks for, after lower-casing the label and stripping spaces,
/// hyphens and underscores.

/// Redemption of units back to the fund house. Decreases units.
pub const LABEL_KEYWORD_REDEEM: &str = "redeem";

/// Switch out of a scheme into another one. Decreases units in this scheme.
pub const LABEL_KEYWORD_SWITCH_OUT: &str = "switchout";

/// Recurring scheduled purchase (SIP). Increases units.
pub const LABEL_KEYWORD_SYSTEMATIC: &str = "systematic";

/// One-off lump-sum purchase. Increases units.
pub const LABEL_KEYWORD_PURCHASE: &str = "purchase";

/// Canonical transaction kinds
pub const TRANSACTION_KIND_PURCHASE: &str = "PURCHASE";
pub const TRANSACTION_KIND_SYSTEMATIC: &str = "SYSTEMATIC";
pub const TRANSACTION_KIND_REDEEM: &str = "REDEEM";
pub const TRANSACTION_KIND_SWITCH_OUT: &str = "SWITCH_OUT";
pub const TRANSACTION_KIND_UNKNOWN: &str = "UNKNOWN";

/// Lower-cases a raw label and drops the separators registrars use
/// inconsistently ("Switch Out", "SWITCH-OUT", "switch_out").
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
