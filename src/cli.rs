//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::estimator::Tariff;

/// Bijli Buddy: estimate an electricity bill from units, appliances and solar panels.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct CliOptions {
    /// Load the session from a TOML file.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub session: Option<PathBuf>,

    /// Use a built-in session preset (empty, household, shop).
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Select a tariff plan, overriding the session.
    #[arg(long, value_name = "NAME")]
    pub plan: Option<Tariff>,

    /// Set manually entered units, overriding the session.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub units: Option<f64>,

    /// Set the number of solar panels, overriding the session.
    #[arg(long, value_name = "N")]
    pub solar_panels: Option<u32>,

    /// Record the estimate in the history log.
    #[arg(long)]
    pub save: bool,

    /// Write the history log to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub history_out: Option<PathBuf>,

    /// Print energy-saving tips.
    #[arg(long)]
    pub tips: bool,

    /// Start the interactive terminal UI.
    #[cfg(feature = "tui")]
    #[arg(long)]
    pub tui: bool,
}

impl CliOptions {
    /// Preset used when neither `--session` nor `--preset` is given.
    pub const DEFAULT_PRESET: &str = "empty";

    /// Preset name to load when no session file is given.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or(Self::DEFAULT_PRESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        CliOptions::try_parse_from(std::iter::once("bijli-buddy").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_empty_preset() {
        let opts = parse(&[]).ok();
        assert_eq!(opts.as_ref().map(CliOptions::preset_name), Some("empty"));
        assert_eq!(opts.as_ref().map(|o| o.save), Some(false));
    }

    #[test]
    fn supports_session_cli() {
        let opts = parse(&["--session", "home.toml"]).ok();
        assert_eq!(
            opts.as_ref()
                .and_then(|o| o.session.as_deref())
                .and_then(|p| p.to_str()),
            Some("home.toml")
        );
    }

    #[test]
    fn session_and_preset_are_mutually_exclusive() {
        assert!(parse(&["--session", "a.toml", "--preset", "shop"]).is_err());
    }

    #[test]
    fn parses_overrides() {
        let opts = parse(&["--plan", "commercial", "--units", "250", "--solar-panels", "4"]).ok();
        assert_eq!(opts.as_ref().and_then(|o| o.plan), Some(Tariff::Commercial));
        assert_eq!(opts.as_ref().and_then(|o| o.units), Some(250.0));
        assert_eq!(opts.as_ref().and_then(|o| o.solar_panels), Some(4));
    }

    #[test]
    fn rejects_unknown_plan() {
        assert!(parse(&["--plan", "agricultural"]).is_err());
    }
}
