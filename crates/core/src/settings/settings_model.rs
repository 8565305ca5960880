//! Analytics configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::default_unit_threshold;

/// Default starting rate for the XIRR iteration (10%).
pub const DEFAULT_XIRR_GUESS: f64 = 0.1;

/// Default convergence tolerance between successive XIRR iterates.
pub const DEFAULT_XIRR_TOLERANCE: f64 = 1e-7;

/// Default iteration cap before XIRR gives up.
pub const DEFAULT_XIRR_MAX_ITERATIONS: u32 = 100;

/// Default number of memoized overviews kept by the analytics service.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Newton-Raphson parameters for the XIRR solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XirrSettings {
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: u32,
    pub days_per_year: f64,
}

impl Default for XirrSettings {
    fn default() -> Self {
        XirrSettings {
            initial_guess: DEFAULT_XIRR_GUESS,
            tolerance: DEFAULT_XIRR_TOLERANCE,
            max_iterations: DEFAULT_XIRR_MAX_ITERATIONS,
            days_per_year: DAYS_PER_YEAR,
        }
    }
}

/// Settings for the analytics engine.
///
/// Every field has a default, so an empty JSON object is a valid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    pub xirr: XirrSettings,
    /// Schemes with net units at or below this are treated as fully redeemed
    /// in the holdings view.
    pub holdings_unit_threshold: Decimal,
    pub cache_capacity: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        AnalyticsSettings {
            xirr: XirrSettings::default(),
            holdings_unit_threshold: default_unit_threshold(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AnalyticsSettings {
    /// Parses settings from a JSON document and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: AnalyticsSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let xirr = &self.xirr;
        if !xirr.initial_guess.is_finite() || xirr.initial_guess <= -1.0 {
            return Err(Error::InvalidConfigValue(format!(
                "xirr.initialGuess must be a finite rate above -1, got {}",
                xirr.initial_guess
            )));
        }
        if !xirr.tolerance.is_finite() || xirr.tolerance <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "xirr.tolerance must be positive, got {}",
                xirr.tolerance
            )));
        }
        if xirr.max_iterations == 0 {
            return Err(Error::InvalidConfigValue(
                "xirr.maxIterations must be at least 1".to_string(),
            ));
        }
        if !xirr.days_per_year.is_finite() || xirr.days_per_year <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "xirr.daysPerYear must be positive, got {}",
                xirr.days_per_year
            )));
        }
        if self.holdings_unit_threshold.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "holdingsUnitThreshold must not be negative, got {}",
                self.holdings_unit_threshold
            )));
        }
        Ok(())
    }
}
