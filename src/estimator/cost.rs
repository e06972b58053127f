//! Pure cost derivation from estimator inputs.

use std::fmt;

use super::tariff::Tariff;
use super::types::{Appliance, GST_RATE, UNITS_PER_PANEL};

/// Full intermediate chain of one cost derivation.
///
/// Derived from inputs only, so two identical input sets always give the
/// same breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    /// Manually entered units.
    pub units: f64,
    /// Sum of `consumption * hours` over the appliance list.
    pub appliance_consumption: f64,
    /// Units credited by solar panels (`panels * 4`).
    pub solar_offset: f64,
    /// Billable units, never negative.
    pub total_units: f64,
    /// Selected plan, if any.
    pub tariff: Option<Tariff>,
    /// Rate of the selected plan, or 0 with no plan.
    pub rate: f64,
    /// `total_units * rate`.
    pub base_amount: f64,
    /// GST on the base amount.
    pub tax: f64,
    /// `base_amount + tax`; 0 when no plan is selected.
    pub total_cost: f64,
}

/// Sums `consumption * hours` over all appliances.
pub fn appliance_consumption(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(Appliance::daily_units).sum()
}

/// Derives the billable units and cost for one set of inputs.
///
/// # Arguments
///
/// * `units` - Manually entered units
/// * `tariff` - Selected plan; `None` yields a zero cost
/// * `appliances` - Appliance list
/// * `solar_panels` - Installed panel count
///
/// # Examples
///
/// ```
/// use bijli_buddy::estimator::cost::derive_cost;
/// use bijli_buddy::estimator::tariff::Tariff;
/// use bijli_buddy::estimator::types::Appliance;
///
/// let fridge = [Appliance::new("Fridge", 1.5, 24.0)];
/// let b = derive_cost(100.0, Some(Tariff::Residential), &fridge, 2);
/// assert_eq!(b.total_units, 128.0);
/// assert!((b.total_cost - 830.72).abs() < 1e-9);
/// ```
pub fn derive_cost(
    units: f64,
    tariff: Option<Tariff>,
    appliances: &[Appliance],
    solar_panels: u32,
) -> CostBreakdown {
    let appliance_consumption = appliance_consumption(appliances);
    let solar_offset = f64::from(solar_panels) * UNITS_PER_PANEL;
    let total_units = (units + appliance_consumption - solar_offset).max(0.0);

    let (rate, base_amount, tax, total_cost) = match tariff {
        Some(t) => {
            let base = total_units * t.rate();
            let tax = base * GST_RATE;
            (t.rate(), base, tax, base + tax)
        }
        None => (0.0, 0.0, 0.0, 0.0),
    };

    CostBreakdown {
        units,
        appliance_consumption,
        solar_offset,
        total_units,
        tariff,
        rate,
        base_amount,
        tax,
        total_cost,
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::format::rupees;

        writeln!(f, "--- Bill Estimate ---")?;
        writeln!(f, "Units entered:         {:.2}", self.units)?;
        writeln!(f, "Appliance usage:       {:.2}", self.appliance_consumption)?;
        writeln!(f, "Solar offset:          -{:.2}", self.solar_offset)?;
        writeln!(f, "Billable units:        {:.2}", self.total_units)?;
        match self.tariff {
            Some(t) => writeln!(f, "Tariff plan:           {} ({}/unit)", t, rupees(self.rate))?,
            None => writeln!(f, "Tariff plan:           none selected")?,
        }
        writeln!(f, "Base amount:           {}", rupees(self.base_amount))?;
        writeln!(f, "GST (18%):             {}", rupees(self.tax))?;
        write!(f, "Total cost:            {}", rupees(self.total_cost))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn worked_example() {
        let appliances = [Appliance::new("Fridge", 1.5, 24.0)];
        let b = derive_cost(100.0, Some(Tariff::Residential), &appliances, 2);
        assert_relative_eq!(b.appliance_consumption, 36.0);
        assert_relative_eq!(b.solar_offset, 8.0);
        assert_relative_eq!(b.total_units, 128.0);
        assert_relative_eq!(b.base_amount, 704.0);
        assert_relative_eq!(b.total_cost, 830.72, epsilon = 1e-9);
    }

    #[test]
    fn no_plan_yields_zero_cost() {
        let appliances = [Appliance::new("Fridge", 1.5, 24.0)];
        let b = derive_cost(100.0, None, &appliances, 0);
        assert_relative_eq!(b.total_units, 136.0);
        assert_eq!(b.total_cost, 0.0);
        assert_eq!(b.base_amount, 0.0);
        assert_eq!(b.rate, 0.0);
    }

    #[test]
    fn solar_offset_never_drives_units_negative() {
        let b = derive_cost(0.0, Some(Tariff::Commercial), &[], 20);
        assert_eq!(b.total_units, 0.0);
        assert_eq!(b.total_cost, 0.0);
    }

    #[test]
    fn matches_closed_form_for_every_plan() {
        let appliances = [
            Appliance::new("Fan", 0.075, 10.0),
            Appliance::new("AC", 1.5, 6.0),
            Appliance::new("Fan", 0.075, 4.0),
        ];
        for tariff in Tariff::ALL {
            for panels in [0, 3, 20] {
                let b = derive_cost(250.0, Some(tariff), &appliances, panels);
                let expected_units =
                    (250.0 + 0.75 + 9.0 + 0.3 - 4.0 * f64::from(panels)).max(0.0);
                assert_relative_eq!(b.total_units, expected_units, epsilon = 1e-9);
                assert_relative_eq!(
                    b.total_cost,
                    expected_units * tariff.rate() * 1.18,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn display_lists_total_last() {
        let b = derive_cost(10.0, Some(Tariff::Industrial), &[], 0);
        let text = b.to_string();
        assert!(text.starts_with("--- Bill Estimate ---"));
        assert!(text.contains("Tariff plan:           Industrial (₹6.80/unit)"));
        assert!(text.ends_with("Total cost:            ₹80.24"));
    }
}
