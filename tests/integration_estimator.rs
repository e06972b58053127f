//! Integration tests for the estimator's public API.

mod common;

use approx::assert_relative_eq;

use bijli_buddy::Estimator;
use bijli_buddy::config::SessionConfig;
use bijli_buddy::estimator::Tariff;
use bijli_buddy::io::export::write_csv;

#[test]
fn worked_example_cost_chain() {
    let est = common::worked_example();
    let b = est.breakdown();
    assert_relative_eq!(b.appliance_consumption, 36.0);
    assert_relative_eq!(b.total_units, 128.0);
    assert_relative_eq!(b.base_amount, 704.0, epsilon = 1e-9);
    assert_relative_eq!(est.total_cost(), 830.72, epsilon = 1e-9);
}

#[test]
fn cost_matches_closed_form_across_inputs() {
    let appliance_sets: [&[(f64, f64)]; 3] = [
        &[],
        &[(0.1, 5.0)],
        &[(1.5, 24.0), (0.075, 10.0), (2.0, 0.5)],
    ];
    let plans = [None, Some(Tariff::Residential), Some(Tariff::Commercial), Some(Tariff::Industrial)];

    for appliances in appliance_sets {
        for plan in plans {
            for units in [0.0, 12.5, 480.0, 10_000.0] {
                for panels in [0, 1, 7, 20] {
                    let mut est = Estimator::new();
                    est.set_units(units);
                    est.select_plan(plan);
                    est.set_solar_panels(panels);
                    for (i, (c, h)) in appliances.iter().enumerate() {
                        est.add_appliance(&format!("A{i}"), Some(*c), Some(*h));
                    }
                    let expected = common::expected_cost(units, plan, appliances, panels);
                    assert_relative_eq!(est.total_cost(), expected, epsilon = 1e-6);
                    assert!(est.total_units() >= 0.0);
                }
            }
        }
    }
}

#[test]
fn no_units_full_solar_never_goes_negative() {
    let mut est = Estimator::new();
    est.select_plan(Some(Tariff::Industrial));
    est.set_solar_panels(20);
    assert_eq!(est.total_units(), 0.0);
    assert_eq!(est.total_cost(), 0.0);
}

#[test]
fn rejected_adds_leave_list_unchanged() {
    let mut est = common::worked_example();
    let before = est.appliances().to_vec();
    est.add_appliance("", Some(5.0), Some(1.0));
    est.add_appliance("Fan", None, Some(1.0));
    assert_eq!(est.appliances(), before.as_slice());
    assert_relative_eq!(est.total_cost(), 830.72, epsilon = 1e-9);
}

#[test]
fn out_of_range_removal_leaves_list_unchanged() {
    let mut est = common::worked_example();
    let cost = est.total_cost();
    for index in [1, 2, 100, usize::MAX] {
        assert!(est.remove_appliance(index).is_none());
    }
    assert_eq!(est.appliances().len(), 1);
    assert_eq!(est.total_cost(), cost);
}

#[test]
fn history_is_append_only() {
    let mut est = common::worked_example();
    for n in 1..=10 {
        est.set_units(f64::from(n));
        est.save_to_history_on(common::fixed_date(n));
        assert_eq!(est.history().len(), n as usize);
    }
    let snapshot: Vec<_> = est.history().entries().to_vec();
    est.select_plan(None);
    est.remove_appliance(0);
    est.set_units(0.0);
    assert_eq!(est.history().entries(), snapshot.as_slice());
    for (i, entry) in snapshot.iter().enumerate() {
        assert_eq!(entry.date, common::fixed_date(i as u32 + 1));
    }
}

#[test]
fn session_presets_match_manual_construction() {
    let from_preset = SessionConfig::household().build();
    let manual = common::worked_example();
    let cost = from_preset.as_ref().map(Estimator::total_cost).ok();
    assert_eq!(cost, Some(manual.total_cost()));
}

#[test]
fn history_exports_as_csv() {
    let mut est = common::worked_example();
    est.save_to_history_on(common::fixed_date(1));
    est.select_plan(None);
    est.save_to_history_on(common::fixed_date(2));

    let mut buf = Vec::new();
    assert!(write_csv(est.history().entries(), &mut buf).is_ok());
    let text = String::from_utf8(buf).unwrap_or_default();
    assert_eq!(
        text,
        "date,units,cost\n2024-04-01,100.00,830.72\n2024-04-02,100.00,0.00\n"
    );
}
