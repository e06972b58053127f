//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use bijli_buddy::Estimator;
use bijli_buddy::estimator::Tariff;

/// Fixed date for deterministic history entries.
pub fn fixed_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, day).unwrap_or_default()
}

/// Residential, 100 units, one fridge (1.5 x 24 h), two panels.
pub fn worked_example() -> Estimator {
    let mut est = Estimator::new();
    est.set_units(100.0);
    est.select_plan(Some(Tariff::Residential));
    est.add_appliance("Fridge", Some(1.5), Some(24.0));
    est.set_solar_panels(2);
    est
}

/// Closed-form cost used to cross-check the estimator.
pub fn expected_cost(
    units: f64,
    tariff: Option<Tariff>,
    appliances: &[(f64, f64)],
    panels: u32,
) -> f64 {
    let Some(tariff) = tariff else {
        return 0.0;
    };
    let usage: f64 = appliances.iter().map(|(c, h)| c * h).sum();
    (units + usage - 4.0 * f64::from(panels)).max(0.0) * tariff.rate() * 1.18
}
