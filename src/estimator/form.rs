//! Draft state for the add-appliance form.

use super::types::{DEFAULT_HOURS, MAX_HOURS_PER_DAY, clamp_finite};

/// Fields of the add-appliance form before submission.
///
/// `consumption` stays `None` until the user enters a value, which is what
/// lets the estimator reject a submission with no consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceForm {
    pub name: String,
    pub consumption: Option<f64>,
    pub hours: f64,
}

impl Default for ApplianceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            consumption: None,
            hours: DEFAULT_HOURS,
        }
    }
}

impl ApplianceForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_consumption(&mut self, consumption: Option<f64>) {
        self.consumption = consumption;
    }

    /// Sets usage hours, clamped to `[0, 24]`.
    pub fn set_hours(&mut self, hours: f64) {
        self.hours = clamp_finite(hours, 0.0, MAX_HOURS_PER_DAY);
    }

    /// Restores the empty form: no name, no consumption, one hour.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_with_one_hour() {
        let form = ApplianceForm::default();
        assert!(form.name.is_empty());
        assert!(form.consumption.is_none());
        assert_eq!(form.hours, 1.0);
    }

    #[test]
    fn hours_are_clamped() {
        let mut form = ApplianceForm::default();
        form.set_hours(30.0);
        assert_eq!(form.hours, 24.0);
        form.set_hours(-2.0);
        assert_eq!(form.hours, 0.0);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = ApplianceForm::default();
        form.set_name("Geyser");
        form.set_consumption(Some(2.0));
        form.set_hours(3.0);
        form.reset();
        assert_eq!(form, ApplianceForm::default());
    }
}
