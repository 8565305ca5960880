/// Selector value meaning "every investor in the ledger"
pub const ALL_INVESTORS: &str = "all";

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Quantity threshold below which a scheme counts as fully redeemed
pub const QUANTITY_THRESHOLD: &str = "0.00000001";

/// Average year length used to annualize cash-flow spans
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
