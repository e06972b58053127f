//! TOML-based session configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::estimator::Estimator;
use crate::estimator::tariff::Tariff;
use crate::estimator::types::{DEFAULT_HOURS, MAX_HOURS_PER_DAY, MAX_SOLAR_PANELS, MAX_UNITS};

/// Initial estimator inputs parsed from TOML.
///
/// All fields have defaults matching the empty widget. Load from TOML with
/// [`SessionConfig::from_toml_file`] or pick a preset with
/// [`SessionConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Scalar inputs.
    #[serde(default)]
    pub session: InputsConfig,
    /// Appliance list, in insertion order.
    #[serde(default)]
    pub appliances: Vec<ApplianceConfig>,
}

/// Scalar estimator inputs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputsConfig {
    /// Manually entered units (`[0, 10000]`).
    pub units: f64,
    /// Tariff plan name; absent means no plan selected.
    pub plan: Option<String>,
    /// Installed solar panels (`[0, 20]`).
    pub solar_panels: u32,
}

/// One appliance entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    pub name: String,
    /// Units per hour (finite, >= 0).
    pub consumption: f64,
    /// Hours per day (`[0, 24]`), defaults to 1.
    #[serde(default = "default_hours")]
    pub hours: f64,
}

fn default_hours() -> f64 {
    DEFAULT_HOURS
}

impl ApplianceConfig {
    fn new(name: &str, consumption: f64, hours: f64) -> Self {
        Self {
            name: name.to_string(),
            consumption,
            hours,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"appliances[2].hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl SessionConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["empty", "household", "shop"];

    /// The widget's initial state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A home on the residential plan with a fridge and two panels.
    pub fn household() -> Self {
        Self {
            session: InputsConfig {
                units: 100.0,
                plan: Some("Residential".to_string()),
                solar_panels: 2,
            },
            appliances: vec![ApplianceConfig::new("Fridge", 1.5, 24.0)],
        }
    }

    /// A small shop on the commercial plan.
    pub fn shop() -> Self {
        Self {
            session: InputsConfig {
                units: 450.0,
                plan: Some("Commercial".to_string()),
                solar_panels: 5,
            },
            appliances: vec![
                ApplianceConfig::new("Display fridge", 0.8, 24.0),
                ApplianceConfig::new("Lighting", 0.4, 12.0),
                ApplianceConfig::new("Air conditioner", 1.5, 10.0),
            ],
        }
    }

    /// Loads a session from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] if the name is not in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self> {
        match name {
            "empty" => Ok(Self::empty()),
            "household" => Ok(Self::household()),
            "shop" => Ok(Self::shop()),
            _ => Err(Error::UnknownPreset {
                name: name.to_string(),
                available: Self::PRESETS.join(", "),
            }),
        }
    }

    /// Parses a session from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadSession {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a session from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseSession`] on malformed TOML or unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the session is valid. Stricter than the
    /// estimator's setters, which clamp instead of rejecting.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.session;

        if !(0.0..=MAX_UNITS).contains(&s.units) {
            errors.push(ConfigError {
                field: "session.units".into(),
                message: format!("must be in [0, {MAX_UNITS}], got {}", s.units),
            });
        }
        if s.solar_panels > MAX_SOLAR_PANELS {
            errors.push(ConfigError {
                field: "session.solar_panels".into(),
                message: format!("must be <= {MAX_SOLAR_PANELS}, got {}", s.solar_panels),
            });
        }
        if let Some(Err(e)) = s.plan.as_deref().map(str::parse::<Tariff>) {
            errors.push(ConfigError {
                field: "session.plan".into(),
                message: e.to_string(),
            });
        }

        for (i, a) in self.appliances.iter().enumerate() {
            if a.name.is_empty() {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].name"),
                    message: "must not be empty".into(),
                });
            }
            if !a.consumption.is_finite() || a.consumption < 0.0 {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].consumption"),
                    message: "must be a finite number >= 0".into(),
                });
            }
            if !(0.0..=MAX_HOURS_PER_DAY).contains(&a.hours) {
                errors.push(ConfigError {
                    field: format!("appliances[{i}].hours"),
                    message: format!("must be in [0, {MAX_HOURS_PER_DAY}]"),
                });
            }
        }

        errors
    }

    /// Validates the session and builds an estimator seeded with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSession`] listing every failed field.
    pub fn build(&self) -> Result<Estimator> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(Error::InvalidSession(errors));
        }

        let mut estimator = Estimator::new();
        estimator.set_units(self.session.units);
        estimator.set_solar_panels(self.session.solar_panels);
        estimator.select_plan(self.session.plan.as_deref().map(str::parse).transpose()?);
        for a in &self.appliances {
            estimator.add_appliance(&a.name, Some(a.consumption), Some(a.hours));
        }
        Ok(estimator)
    }
}
