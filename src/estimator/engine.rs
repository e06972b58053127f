//! Estimator controller owning all session state.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::chart::ConsumptionChart;
use super::cost::{CostBreakdown, appliance_consumption, derive_cost};
use super::form::ApplianceForm;
use super::history::HistoryLog;
use super::tariff::Tariff;
use super::types::{
    Appliance, DEFAULT_HOURS, HistoryEntry, MAX_HOURS_PER_DAY, MAX_SOLAR_PANELS, MAX_UNITS,
    clamp_finite,
};

/// Bill estimator for one session.
///
/// Every setter clamps or rejects its input and then calls
/// [`recompute`](Self::recompute), so [`total_cost`](Self::total_cost) always
/// reflects the current inputs. No operation returns an error.
///
/// # Examples
///
/// ```
/// use bijli_buddy::estimator::engine::Estimator;
/// use bijli_buddy::estimator::tariff::Tariff;
///
/// let mut est = Estimator::new();
/// est.set_units(100.0);
/// est.select_plan(Some(Tariff::Residential));
/// est.add_appliance("Fridge", Some(1.5), Some(24.0));
/// est.set_solar_panels(2);
/// assert!((est.total_cost() - 830.72).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    units: f64,
    selected_plan: Option<Tariff>,
    appliances: Vec<Appliance>,
    solar_panels: u32,
    form: ApplianceForm,
    history: HistoryLog,
    breakdown: CostBreakdown,
}

impl Estimator {
    /// Creates an estimator in the widget's initial state: zero units, no
    /// plan, no appliances, no panels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets manually entered units, clamped to `[0, 10000]`.
    pub fn set_units(&mut self, units: f64) {
        self.units = clamp_finite(units, 0.0, MAX_UNITS);
        debug!(units = self.units, "units updated");
        self.recompute();
    }

    /// Selects one of the fixed plans, or clears the selection.
    pub fn select_plan(&mut self, plan: Option<Tariff>) {
        self.selected_plan = plan;
        debug!(plan = ?plan, "tariff plan selected");
        self.recompute();
    }

    /// Sets the solar panel count, clamped to `[0, 20]`.
    pub fn set_solar_panels(&mut self, panels: u32) {
        self.solar_panels = panels.min(MAX_SOLAR_PANELS);
        debug!(panels = self.solar_panels, "solar panels updated");
        self.recompute();
    }

    /// Appends an appliance and resets the form.
    ///
    /// Rejected without side effects when `name` is empty or `consumption`
    /// is `None` or not finite. Missing `hours` default to 1; hours are
    /// clamped to `[0, 24]` and consumption to `>= 0`.
    ///
    /// # Returns
    ///
    /// `true` if the appliance was added.
    pub fn add_appliance(
        &mut self,
        name: &str,
        consumption: Option<f64>,
        hours: Option<f64>,
    ) -> bool {
        let Some(consumption) = consumption.filter(|c| c.is_finite() && !name.is_empty()) else {
            debug!(name, ?consumption, "appliance rejected");
            return false;
        };
        let appliance = Appliance::new(
            name,
            consumption.max(0.0),
            clamp_finite(hours.unwrap_or(DEFAULT_HOURS), 0.0, MAX_HOURS_PER_DAY),
        );
        debug!(
            name = %appliance.name,
            consumption = appliance.consumption,
            hours = appliance.hours,
            "appliance added"
        );
        self.appliances.push(appliance);
        self.form.reset();
        self.recompute();
        true
    }

    /// Submits the add-appliance form through [`add_appliance`](Self::add_appliance).
    pub fn submit_form(&mut self) -> bool {
        let ApplianceForm {
            name,
            consumption,
            hours,
        } = self.form.clone();
        self.add_appliance(&name, consumption, Some(hours))
    }

    /// Removes the appliance at `index`. Out-of-range indices are ignored.
    ///
    /// # Returns
    ///
    /// The removed appliance, if any.
    pub fn remove_appliance(&mut self, index: usize) -> Option<Appliance> {
        if index >= self.appliances.len() {
            debug!(index, len = self.appliances.len(), "remove ignored: index out of range");
            return None;
        }
        let removed = self.appliances.remove(index);
        debug!(index, name = %removed.name, "appliance removed");
        self.recompute();
        Some(removed)
    }

    /// Re-derives the cost breakdown from the current inputs.
    pub fn recompute(&mut self) {
        self.breakdown = derive_cost(
            self.units,
            self.selected_plan,
            &self.appliances,
            self.solar_panels,
        );
    }

    /// Records the current units and cost under today's local date.
    pub fn save_to_history(&mut self) -> &HistoryEntry {
        self.save_to_history_on(Local::now().date_naive())
    }

    /// Records the current units and cost under `date`.
    ///
    /// Saving with no plan selected is allowed and records a cost of 0.
    pub fn save_to_history_on(&mut self, date: NaiveDate) -> &HistoryEntry {
        let entry = HistoryEntry {
            date,
            units: self.units,
            cost: self.total_cost(),
        };
        info!(%date, units = entry.units, cost = entry.cost, "estimate saved to history");
        self.history.push(entry);
        &self.history.entries()[self.history.len() - 1]
    }

    /// Sum of `consumption * hours` over all appliances.
    pub fn total_consumption(&self) -> f64 {
        appliance_consumption(&self.appliances)
    }

    pub fn total_cost(&self) -> f64 {
        self.breakdown.total_cost
    }

    pub fn total_units(&self) -> f64 {
        self.breakdown.total_units
    }

    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    pub fn units(&self) -> f64 {
        self.units
    }

    pub fn selected_plan(&self) -> Option<Tariff> {
        self.selected_plan
    }

    pub fn solar_panels(&self) -> u32 {
        self.solar_panels
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn form(&self) -> &ApplianceForm {
        &self.form
    }

    /// Mutable access to the draft form. Editing the form never changes the
    /// cost; only [`submit_form`](Self::submit_form) does.
    pub fn form_mut(&mut self) -> &mut ApplianceForm {
        &mut self.form
    }

    /// Chart data for the current appliance list.
    pub fn chart(&self) -> ConsumptionChart {
        ConsumptionChart::from_appliances(&self.appliances)
    }
}
