//! Money-weighted annualized return (XIRR).
//!
//! Finds the rate `r` for which the net present value of an irregularly dated
//! cash-flow series is zero, using undamped Newton-Raphson iteration.
//! Failure to converge is reported as `None`, never as an error.

use chrono::NaiveDateTime;
use log::debug;
use num_traits::ToPrimitive;

use super::performance_model::CashFlowEvent;
use crate::constants::SECONDS_PER_DAY;
use crate::settings::XirrSettings;

/// Calculates XIRR with the default tolerance, iteration cap and year length.
///
/// Returns the annual rate as a percentage (`12.34` means 12.34% a year), or
/// `None` when fewer than two events are given or the iteration does not
/// converge.
pub fn calculate_xirr(events: &[CashFlowEvent], guess: f64) -> Option<f64> {
    let settings = XirrSettings {
        initial_guess: guess,
        ..XirrSettings::default()
    };
    calculate_xirr_with(events, &settings)
}

/// Calculates XIRR using explicit solver settings.
///
/// Events are sorted by date, then amount, so the input order does not matter
/// even when several flows share a date.
pub fn calculate_xirr_with(events: &[CashFlowEvent], settings: &XirrSettings) -> Option<f64> {
    if events.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&CashFlowEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.amount.cmp(&b.amount)));
    let base_date = sorted[0].date;

    let flows: Vec<(f64, f64)> = sorted
        .iter()
        .map(|event| {
            (
                event.amount.to_f64().unwrap_or(0.0),
                year_fraction(base_date, event.date, settings.days_per_year),
            )
        })
        .collect();

    let mut rate = settings.initial_guess;
    for iteration in 0..settings.max_iterations {
        let (npv, npv_derivative) = npv_and_derivative(&flows, rate);
        let new_rate = rate - npv / npv_derivative;

        if !new_rate.is_finite() {
            debug!(
                "XIRR diverged after {} iterations (rate {}, npv {}, dnpv {})",
                iteration + 1,
                rate,
                npv,
                npv_derivative
            );
            return None;
        }

        if (new_rate - rate).abs() < settings.tolerance {
            return Some(new_rate * 100.0);
        }

        rate = new_rate;
    }

    debug!(
        "XIRR did not converge within {} iterations (last rate {})",
        settings.max_iterations, rate
    );
    None
}

/// Years elapsed between `base` and `date`.
fn year_fraction(base: NaiveDateTime, date: NaiveDateTime, days_per_year: f64) -> f64 {
    (date - base).num_seconds() as f64 / (days_per_year * SECONDS_PER_DAY)
}

/// NPV and dNPV/dr at `rate` for `(amount, years)` pairs.
fn npv_and_derivative(flows: &[(f64, f64)], rate: f64) -> (f64, f64) {
    let base = 1.0 + rate;
    flows
        .iter()
        .fold((0.0, 0.0), |(npv, derivative), &(amount, years)| {
            (
                npv + amount / base.powf(years),
                derivative - amount * years / base.powf(years + 1.0),
            )
        })
}
