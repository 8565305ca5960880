//! Service assembling holdings, cohorts and XIRR into one overview.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use log::{debug, warn};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use super::PortfolioOverview;
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::portfolio::categorization::{
    categorize_mutual_funds, categorize_purchases, categorize_redemptions, categorize_users,
};
use crate::portfolio::holdings::{aggregate_holdings, sort_chronologically, SchemeAggregate};
use crate::portfolio::performance::{
    build_cash_flows, calculate_return_percent, calculate_xirr_with, has_sign_change,
};
use crate::portfolio::view::{select_view, InvestorSelection, Redact};
use crate::settings::AnalyticsSettings;
use crate::transactions::TransactionRecord;
use crate::utils::decimal_utils::{add_or_keep, sub_or_zero};
use crate::utils::fingerprint::compute_overview_key;

/// Trait for the analytics service.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Builds (or serves from cache) the overview for one investor selection.
    ///
    /// `as_of` dates the synthetic terminal valuation used by XIRR.
    /// Unprivileged callers get zeroed money figures and no XIRR.
    fn get_portfolio_overview(
        &self,
        records: &[TransactionRecord],
        selection: &InvestorSelection,
        privileged: bool,
        as_of: NaiveDate,
    ) -> Arc<PortfolioOverview>;

    /// Drops every memoized overview.
    fn clear_cache(&self);

    /// Number of memoized overviews.
    fn cache_len(&self) -> usize;
}

/// Analytics service memoizing overviews by ledger content.
pub struct AnalyticsService {
    settings: AnalyticsSettings,
    cache: DashMap<String, Arc<PortfolioOverview>>,
}

impl AnalyticsService {
    pub fn new(settings: AnalyticsSettings) -> Result<Self> {
        settings.validate()?;
        Ok(AnalyticsService {
            settings,
            cache: DashMap::new(),
        })
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    /// Runs the full pipeline without touching the cache.
    pub fn compute_overview(
        &self,
        records: &[TransactionRecord],
        selection: &InvestorSelection,
        privileged: bool,
        as_of: NaiveDate,
    ) -> PortfolioOverview {
        let view = select_view(records, selection, privileged);
        let ledger = sort_chronologically(&view.records);

        let holdings = aggregate_holdings(&ledger, self.settings.holdings_unit_threshold);
        let (total_invested, current_value) = Self::sum_holdings(&holdings);
        let total_returns = sub_or_zero(current_value, total_invested, "portfolio returns");

        let cash_flows = build_cash_flows(&ledger, current_value, as_of);
        let xirr = if has_sign_change(&cash_flows) {
            calculate_xirr_with(&cash_flows, &self.settings.xirr).and_then(Self::xirr_to_decimal)
        } else {
            None
        };

        let mut overview = PortfolioOverview {
            investor: selection.as_key().to_string(),
            as_of,
            zero_pnl: view.zero_pnl,
            total_invested,
            current_value,
            total_returns,
            return_percent: calculate_return_percent(total_returns, total_invested),
            xirr,
            scheme_count: holdings.len(),
            investors: categorize_users(&ledger),
            schemes: categorize_mutual_funds(&ledger),
            purchases: categorize_purchases(&ledger),
            redemptions: categorize_redemptions(&ledger),
            holdings,
        };

        if view.zero_pnl {
            overview.redact();
        }

        overview
    }

    /// Converts a solved XIRR percentage for reporting.
    pub(crate) fn xirr_to_decimal(rate: f64) -> Option<Decimal> {
        let converted = Decimal::from_f64(rate);
        if converted.is_none() {
            debug!("XIRR of {}% does not fit a decimal, reporting none", rate);
        }
        converted.map(|rate| rate.round_dp(DECIMAL_PRECISION))
    }

    fn sum_holdings(holdings: &[SchemeAggregate]) -> (Decimal, Decimal) {
        holdings
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(invested, value), h| {
                (
                    add_or_keep(invested, h.total_invested, "portfolio invested"),
                    add_or_keep(value, h.current_value, "portfolio value"),
                )
            })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        AnalyticsService {
            settings: AnalyticsSettings::default(),
            cache: DashMap::new(),
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_portfolio_overview(
        &self,
        records: &[TransactionRecord],
        selection: &InvestorSelection,
        privileged: bool,
        as_of: NaiveDate,
    ) -> Arc<PortfolioOverview> {
        let key = compute_overview_key(records, selection, privileged, as_of);

        if let Some(cached) = self.cache.get(&key) {
            debug!("Serving cached portfolio overview for '{}'", selection);
            return Arc::clone(cached.value());
        }

        debug!(
            "Computing portfolio overview for '{}' over {} records",
            selection,
            records.len()
        );
        let overview = Arc::new(self.compute_overview(records, selection, privileged, as_of));

        let capacity = self.settings.cache_capacity;
        if capacity > 0 {
            if self.cache.len() >= capacity {
                warn!(
                    "Portfolio overview cache reached {} entries, flushing",
                    capacity
                );
                self.cache.clear();
            }
            self.cache.insert(key, Arc::clone(&overview));
        }

        overview
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }

    fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
