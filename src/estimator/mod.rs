/// Per-appliance consumption chart data.
pub mod chart;
pub mod cost;
/// The stateful estimator controller.
pub mod engine;
/// Add-appliance draft form.
pub mod form;
pub mod history;
/// Fixed tariff plan table.
pub mod tariff;
pub mod types;

pub use engine::Estimator;
pub use tariff::{TARIFF_PLANS, Tariff, TariffPlan};
pub use types::{Appliance, HistoryEntry};
