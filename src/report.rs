use std::fmt::Write;

use crate::estimator::chart::ConsumptionChart;
use crate::estimator::history::HistoryLog;
use crate::estimator::{Appliance, TARIFF_PLANS, Tariff};
use crate::format::rupees;
use crate::tips::ENERGY_SAVING_TIPS;

/// Appliance table with each row's share of appliance consumption.
pub fn appliances(appliances: &[Appliance]) -> String {
    let mut out = String::from("--- Appliances ---\n");
    if appliances.is_empty() {
        out.push_str("(none)\n");
        return out;
    }
    let chart = ConsumptionChart::from_appliances(appliances);
    for (i, (a, slice)) in appliances.iter().zip(&chart.slices).enumerate() {
        let _ = writeln!(
            out,
            "{i:>2}. {:<20} {:>7.3} x {:>5.2} h = {:>8.2} units ({:>5.1}%)",
            a.name,
            a.consumption,
            a.hours,
            slice.kwh,
            slice.share * 100.0,
        );
    }
    let _ = writeln!(out, "Total appliance usage: {:.2} units", chart.total_kwh);
    out
}

/// The fixed tariff table, marking the selected plan.
pub fn tariffs(selected: Option<Tariff>) -> String {
    let mut out = String::from("--- Tariff Plans ---\n");
    for (tariff, plan) in Tariff::ALL.iter().zip(TARIFF_PLANS.iter()) {
        let marker = if selected == Some(*tariff) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<12} {}/unit", plan.name, rupees(plan.rate));
    }
    out
}

pub fn history(log: &HistoryLog) -> String {
    let mut out = String::from("--- History ---\n");
    if log.is_empty() {
        out.push_str("(empty)\n");
    }
    for entry in log {
        let _ = writeln!(out, "{entry}");
    }
    out
}

pub fn tips() -> String {
    let mut out = String::from("--- Energy Saving Tips ---\n");
    for (i, tip) in ENERGY_SAVING_TIPS.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {tip}", i + 1);
    }
    out
}
