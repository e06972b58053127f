//! Per-appliance consumption breakdown for chart rendering.

use super::types::Appliance;

/// Slice colors, reused from the start once exhausted.
pub const PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// One appliance's share of daily consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    /// Daily units (`consumption * hours`).
    pub kwh: f64,
    /// Fraction of the chart total in `[0, 1]`; 0 when the total is 0.
    pub share: f64,
    /// Hex color from [`PALETTE`].
    pub color: &'static str,
}

/// Consumption chart data, one slice per appliance in list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumptionChart {
    pub slices: Vec<ChartSlice>,
    pub total_kwh: f64,
}

impl ConsumptionChart {
    /// Builds the chart from the current appliance list.
    pub fn from_appliances(appliances: &[Appliance]) -> Self {
        let total_kwh: f64 = appliances.iter().map(Appliance::daily_units).sum();
        let slices = appliances
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let kwh = a.daily_units();
                ChartSlice {
                    label: a.name.clone(),
                    kwh,
                    share: if total_kwh > 0.0 { kwh / total_kwh } else { 0.0 },
                    color: PALETTE[i % PALETTE.len()],
                }
            })
            .collect();
        Self { slices, total_kwh }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
