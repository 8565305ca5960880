//! Unit tests for the analytics overview service.

use super::*;
use crate::portfolio::view::InvestorSelection;
use crate::settings::AnalyticsSettings;
use crate::transactions::TransactionRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(
    transaction_type: &str,
    investor: &str,
    scheme: &str,
    on: NaiveDate,
    units: Decimal,
    nav: Decimal,
    value: Decimal,
) -> TransactionRecord {
    TransactionRecord::new(transaction_type, investor, on, scheme, units, nav, value, "F-9")
}

fn ledger() -> Vec<TransactionRecord> {
    vec![
        record("Purchase", "A", "X", date(2023, 1, 1), dec!(100), dec!(10), dec!(1000)),
        record("Purchase", "B", "Y", date(2023, 1, 1), dec!(50), dec!(20), dec!(1000)),
        record("Redeem", "B", "Z", date(2023, 6, 1), dec!(-10), dec!(30), dec!(-300)),
        record("Purchase", "B", "Z", date(2023, 2, 1), dec!(10), dec!(25), dec!(250)),
        record("NAV Update", "A", "X", date(2024, 1, 1), Decimal::ZERO, dec!(12), Decimal::ZERO),
        record("NAV Update", "B", "Y", date(2024, 1, 1), Decimal::ZERO, dec!(22), Decimal::ZERO),
    ]
}

fn service() -> AnalyticsService {
    AnalyticsService::default()
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_privileged_overview_totals() {
    let overview = service().compute_overview(
        &ledger(),
        &InvestorSelection::All,
        true,
        date(2024, 1, 1),
    );

    // Z was bought and fully redeemed, so only X and Y are held
    assert_eq!(overview.scheme_count, 2);
    assert_eq!(overview.total_invested, dec!(2000));
    assert_eq!(overview.current_value, dec!(2300));
    assert_eq!(overview.total_returns, dec!(300));
    assert_eq!(overview.return_percent, dec!(15));
    assert!(!overview.zero_pnl);

    // Z still shows up in the cohort views
    assert_eq!(overview.schemes.len(), 3);
    assert_eq!(overview.investors.len(), 2);
    assert_eq!(overview.purchases.len(), 3);
    assert_eq!(overview.redemptions.len(), 1);

    let xirr = overview.xirr.expect("xirr should converge");
    assert!(xirr > dec!(10) && xirr < dec!(20), "got {xirr}");
}

#[test]
fn test_out_of_order_ledger_uses_chronological_nav() {
    let mut shuffled = ledger();
    shuffled.reverse();

    let overview = service().compute_overview(
        &shuffled,
        &InvestorSelection::All,
        true,
        date(2024, 1, 1),
    );
    let x = overview
        .holdings
        .iter()
        .find(|h| h.scheme_name == "X")
        .unwrap();
    assert_eq!(x.latest_nav, dec!(12));
    assert_eq!(overview.current_value, dec!(2300));
}

#[test]
fn test_single_purchase_scenario() {
    let records = vec![
        record("Purchase", "A", "X", date(2023, 1, 1), dec!(100), dec!(10), dec!(1000)),
        record("NAV Update", "A", "X", date(2024, 1, 1), Decimal::ZERO, dec!(12), Decimal::ZERO),
    ];

    let overview = service().compute_overview(
        &records,
        &InvestorSelection::from("A"),
        true,
        date(2024, 1, 1),
    );

    assert_eq!(overview.holdings.len(), 1);
    let x = &overview.holdings[0];
    assert_eq!(x.total_units, dec!(100));
    assert_eq!(x.total_invested, dec!(1000));
    assert_eq!(x.latest_nav, dec!(12));
    assert_eq!(x.current_value, dec!(1200));
    assert_eq!(x.returns, dec!(200));
    assert_eq!(x.return_percent, dec!(20));

    // 365 days is slightly under an average year, so the rate is a hair above 20%
    let xirr = overview.xirr.unwrap();
    assert!(xirr > dec!(19.99) && xirr < dec!(20.1), "got {xirr}");
}

#[test]
fn test_unknown_investor_yields_empty_overview() {
    let overview = service().compute_overview(
        &ledger(),
        &InvestorSelection::from("Nobody"),
        true,
        date(2024, 1, 1),
    );

    assert!(overview.holdings.is_empty());
    assert!(overview.investors.is_empty());
    assert!(overview.schemes.is_empty());
    assert!(overview.purchases.is_empty());
    assert!(overview.redemptions.is_empty());
    assert_eq!(overview.scheme_count, 0);
    assert_eq!(overview.total_invested, Decimal::ZERO);
    assert_eq!(overview.xirr, None);
}

#[test]
fn test_unprivileged_overview_is_redacted() {
    let overview = service().compute_overview(
        &ledger(),
        &InvestorSelection::All,
        false,
        date(2024, 1, 1),
    );

    assert!(overview.zero_pnl);
    assert_eq!(overview.total_invested, Decimal::ZERO);
    assert_eq!(overview.current_value, Decimal::ZERO);
    assert_eq!(overview.total_returns, Decimal::ZERO);
    assert_eq!(overview.return_percent, Decimal::ZERO);
    assert_eq!(overview.xirr, None);

    // Structure survives
    assert_eq!(overview.scheme_count, 2);
    assert_eq!(overview.holdings.len(), 2);
    assert!(overview
        .holdings
        .iter()
        .all(|h| h.current_value.is_zero() && !h.transactions.is_empty()));
    assert_eq!(overview.schemes.len(), 3);
    assert!(overview.investors.iter().all(|i| i.net_investment.is_zero()));
    assert_eq!(overview.purchases.len(), 3);
    assert_eq!(overview.redemptions.len(), 1);
}

#[test]
fn test_investor_filter_narrows_every_view() {
    let overview = service().compute_overview(
        &ledger(),
        &InvestorSelection::from("B"),
        true,
        date(2024, 1, 1),
    );

    assert_eq!(overview.investor, "B");
    assert_eq!(overview.scheme_count, 1);
    assert_eq!(overview.holdings[0].scheme_name, "Y");
    assert_eq!(overview.investors.len(), 1);
    assert_eq!(overview.investors[0].schemes_invested, 2);
    assert_eq!(overview.schemes.len(), 2);
}

#[test]
fn test_extreme_ledger_values_do_not_panic() {
    let records = vec![
        record(
            "Purchase",
            "A",
            "X",
            date(2023, 1, 1),
            dec!(100000000000000000),
            dec!(1000000000000),
            Decimal::MAX,
        ),
        record("Purchase", "A", "Y", date(2023, 1, 1), dec!(1), dec!(10), Decimal::MAX),
    ];

    let overview = service().compute_overview(
        &records,
        &InvestorSelection::All,
        true,
        date(2024, 1, 1),
    );

    assert_eq!(overview.scheme_count, 2);
    // The second scheme's invested amount no longer fits and is skipped
    assert_eq!(overview.total_invested, Decimal::MAX);
    assert_eq!(overview.current_value, dec!(10));
}

#[test]
fn test_xirr_conversion_rounds_and_rejects_out_of_range() {
    assert_eq!(
        AnalyticsService::xirr_to_decimal(12.345_678_91),
        Some(dec!(12.345679))
    );
    assert_eq!(AnalyticsService::xirr_to_decimal(1e30), None);
}

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_repeated_requests_hit_cache() {
    let service = service();
    let as_of = date(2024, 1, 1);

    let first = service.get_portfolio_overview(&ledger(), &InvestorSelection::All, true, as_of);
    // A fresh but identical vector maps to the same entry
    let second = service.get_portfolio_overview(&ledger(), &InvestorSelection::All, true, as_of);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(service.cache_len(), 1);
}

#[test]
fn test_selection_and_privilege_are_separate_entries() {
    let service = service();
    let as_of = date(2024, 1, 1);
    let records = ledger();

    let all = service.get_portfolio_overview(&records, &InvestorSelection::All, true, as_of);
    let redacted = service.get_portfolio_overview(&records, &InvestorSelection::All, false, as_of);
    let only_a = service.get_portfolio_overview(&records, &InvestorSelection::from("A"), true, as_of);

    assert_eq!(service.cache_len(), 3);
    assert!(!all.zero_pnl);
    assert!(redacted.zero_pnl);
    assert_eq!(only_a.scheme_count, 1);
}

#[test]
fn test_investor_named_all_does_not_hit_whole_ledger_entry() {
    let service = service();
    let as_of = date(2024, 1, 1);
    let records = vec![
        record("Purchase", "all", "X", date(2023, 1, 1), dec!(10), dec!(10), dec!(100)),
        record("Purchase", "Ravi", "Y", date(2023, 1, 1), dec!(20), dec!(10), dec!(200)),
    ];

    let everyone = service.get_portfolio_overview(&records, &InvestorSelection::All, true, as_of);
    let named_all: InvestorSelection = serde_json::from_str(r#"{"investor":"all"}"#).unwrap();
    assert_eq!(named_all, InvestorSelection::Investor("all".to_string()));
    let only_all = service.get_portfolio_overview(&records, &named_all, true, as_of);

    assert!(!Arc::ptr_eq(&everyone, &only_all));
    assert_eq!(everyone.investors.len(), 2);
    assert_eq!(only_all.investors.len(), 1);
    assert_eq!(only_all.scheme_count, 1);
    assert_eq!(only_all.holdings[0].scheme_name, "X");
    assert_eq!(service.cache_len(), 2);
}

#[test]
fn test_changed_ledger_recomputes() {
    let service = service();
    let as_of = date(2024, 1, 1);
    let mut records = ledger();

    let before = service.get_portfolio_overview(&records, &InvestorSelection::All, true, as_of);
    records.push(record("Purchase", "A", "X", date(2023, 7, 1), dec!(10), dec!(11), dec!(110)));
    let after = service.get_portfolio_overview(&records, &InvestorSelection::All, true, as_of);

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.total_invested - before.total_invested, dec!(110));
}

#[test]
fn test_cache_flushes_at_capacity() {
    let settings = AnalyticsSettings {
        cache_capacity: 2,
        ..AnalyticsSettings::default()
    };
    let service = AnalyticsService::new(settings).unwrap();
    let records = ledger();

    for day in 1..=3 {
        service.get_portfolio_overview(&records, &InvestorSelection::All, true, date(2024, 1, day));
    }
    // The third insert found the cache full and cleared it first
    assert_eq!(service.cache_len(), 1);

    service.clear_cache();
    assert_eq!(service.cache_len(), 0);
}

#[test]
fn test_zero_capacity_disables_cache() {
    let settings = AnalyticsSettings {
        cache_capacity: 0,
        ..AnalyticsSettings::default()
    };
    let service = AnalyticsService::new(settings).unwrap();
    let as_of = date(2024, 1, 1);

    let first = service.get_portfolio_overview(&ledger(), &InvestorSelection::All, true, as_of);
    let second = service.get_portfolio_overview(&ledger(), &InvestorSelection::All, true, as_of);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(service.cache_len(), 0);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let settings = AnalyticsSettings {
        cache_capacity: 4,
        xirr: crate::settings::XirrSettings {
            tolerance: 0.0,
            ..Default::default()
        },
        ..AnalyticsSettings::default()
    };
    assert!(AnalyticsService::new(settings).is_err());
}
