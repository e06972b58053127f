//! Fixed tariff plan table.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named rate in rupees per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffPlan {
    pub name: &'static str,
    pub rate: f64,
}

/// All plans, in display order.
pub static TARIFF_PLANS: [TariffPlan; 3] = [
    TariffPlan {
        name: "Residential",
        rate: 5.5,
    },
    TariffPlan {
        name: "Commercial",
        rate: 7.2,
    },
    TariffPlan {
        name: "Industrial",
        rate: 6.8,
    },
];

/// Selector into [`TARIFF_PLANS`].
///
/// The estimator stores `Option<Tariff>`, so a plan outside the fixed
/// table cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tariff {
    Residential,
    Commercial,
    Industrial,
}

impl Tariff {
    /// Every selectable tariff, in the same order as [`TARIFF_PLANS`].
    pub const ALL: [Self; 3] = [Self::Residential, Self::Commercial, Self::Industrial];

    /// Returns the plan this selector refers to.
    pub fn plan(self) -> &'static TariffPlan {
        &TARIFF_PLANS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.plan().name
    }

    pub fn rate(self) -> f64 {
        self.plan().rate
    }

    /// Steps through none → Residential → Commercial → Industrial → none.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Residential),
            Some(Self::Residential) => Some(Self::Commercial),
            Some(Self::Commercial) => Some(Self::Industrial),
            Some(Self::Industrial) => None,
        }
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tariff {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTariff(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_table_order() {
        for (tariff, plan) in Tariff::ALL.iter().zip(TARIFF_PLANS.iter()) {
            assert_eq!(tariff.plan(), plan);
        }
        assert_eq!(Tariff::Residential.rate(), 5.5);
        assert_eq!(Tariff::Commercial.rate(), 7.2);
        assert_eq!(Tariff::Industrial.rate(), 6.8);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("residential".parse::<Tariff>().ok(), Some(Tariff::Residential));
        assert_eq!(" COMMERCIAL ".parse::<Tariff>().ok(), Some(Tariff::Commercial));
        assert_eq!("Industrial".parse::<Tariff>().ok(), Some(Tariff::Industrial));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "agricultural".parse::<Tariff>();
        assert!(matches!(err, Err(Error::UnknownTariff(ref name)) if name == "agricultural"));
    }

    #[test]
    fn cycle_visits_every_plan_then_none() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = Tariff::cycle(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Tariff::Residential),
                Some(Tariff::Commercial),
                Some(Tariff::Industrial),
                None,
            ]
        );
    }
}
