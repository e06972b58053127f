//! Core estimator types: appliances, history entries, and input bounds.

use std::fmt;

use chrono::NaiveDate;

/// Upper bound for manually entered units.
pub const MAX_UNITS: f64 = 10_000.0;

/// Upper bound for the solar panel slider.
pub const MAX_SOLAR_PANELS: u32 = 20;

/// Daily consumption credit per installed solar panel (units).
pub const UNITS_PER_PANEL: f64 = 4.0;

/// Upper bound for appliance usage (hours per day).
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Usage hours assumed when the form leaves them unset.
pub const DEFAULT_HOURS: f64 = 1.0;

/// Flat GST multiplier applied on top of the base amount.
pub const GST_RATE: f64 = 0.18;

/// A household appliance contributing to daily consumption.
///
/// # Examples
///
/// ```
/// use bijli_buddy::estimator::types::Appliance;
///
/// let fridge = Appliance::new("Fridge", 1.5, 24.0);
/// assert_eq!(fridge.daily_units(), 36.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Consumption in units per hour of use.
    pub consumption: f64,
    /// Hours of use per day, in `[0, 24]`.
    pub hours: f64,
}

impl Appliance {
    /// Creates an appliance without validation; see
    /// [`Estimator::add_appliance`](super::engine::Estimator::add_appliance)
    /// for the checked path.
    pub fn new(name: impl Into<String>, consumption: f64, hours: f64) -> Self {
        Self {
            name: name.into(),
            consumption,
            hours,
        }
    }

    /// Units consumed per day (`consumption * hours`).
    pub fn daily_units(&self) -> f64 {
        self.consumption * self.hours
    }
}

/// One snapshot in the session history log.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Calendar date the snapshot was taken.
    pub date: NaiveDate,
    /// Manually entered units at save time.
    pub units: f64,
    /// Derived total cost at save time.
    pub cost: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  units={:.2}  cost={}",
            crate::format::date(self.date),
            self.units,
            crate::format::rupees(self.cost),
        )
    }
}

/// Clamps a possibly non-finite value into `[lo, hi]`, mapping NaN to `lo`.
pub(crate) fn clamp_finite(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}
