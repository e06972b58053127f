//! Bijli Buddy entry point: CLI wiring and session-driven estimator construction.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bijli_buddy::cli::CliOptions;
use bijli_buddy::config::SessionConfig;
use bijli_buddy::io::export::export_csv;
use bijli_buddy::{Estimator, report};

fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Loads the session (file, preset, or the empty default) and applies CLI overrides.
fn build_estimator(cli: &CliOptions) -> anyhow::Result<Estimator> {
    let session = match cli.session {
        Some(ref path) => SessionConfig::from_toml_file(path)?,
        None => SessionConfig::from_preset(cli.preset_name())?,
    };
    let mut estimator = session.build().context("cannot start session")?;

    if let Some(units) = cli.units {
        estimator.set_units(units);
    }
    if let Some(panels) = cli.solar_panels {
        estimator.set_solar_panels(panels);
    }
    if let Some(plan) = cli.plan {
        estimator.select_plan(Some(plan));
    }
    Ok(estimator)
}

fn main() -> anyhow::Result<()> {
    let cli = CliOptions::parse();

    #[cfg(feature = "tui")]
    if cli.tui {
        // log lines would corrupt the alternate screen
        init_logging("off");
        let estimator = build_estimator(&cli)?;
        return bijli_buddy::tui::run(estimator).context("terminal UI failed");
    }

    init_logging("warn");
    let mut estimator = build_estimator(&cli)?;

    println!("{}\n", estimator.breakdown());
    println!("{}", report::appliances(estimator.appliances()));
    println!("{}", report::tariffs(estimator.selected_plan()));

    if cli.save || (cli.history_out.is_some() && estimator.history().is_empty()) {
        estimator.save_to_history();
        println!("{}", report::history(estimator.history()));
    }

    if cli.tips {
        println!("{}", report::tips());
    }

    if let Some(ref path) = cli.history_out {
        export_csv(estimator.history().entries(), path)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        eprintln!("History written to {}", path.display());
    }

    Ok(())
}
