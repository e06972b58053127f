//! Electricity bill estimator for a single household session.

pub mod cli;
pub mod config;
pub mod error;
/// Cost estimator core: tariffs, appliances, history.
pub mod estimator;
pub mod format;
pub mod io;
/// Plain-text report sections for the CLI.
pub mod report;
pub mod tips;
#[cfg(feature = "tui")]
pub mod tui;

pub use error::{Error, Result};
pub use estimator::Estimator;
