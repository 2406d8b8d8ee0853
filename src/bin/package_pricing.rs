//! Command-line quoting tool.
//!
//! ```text
//! package-pricing --year 2022 select:photography select:wedding_session
//! package-pricing --table --year 2020
//! ```
//!
//! Results go to stdout, logs to stderr.

use anyhow::Context;
use clap::Parser;
use package_pricing::application::services::quote_report::{
    quote_actions, resolve_year, write_price_table, write_quote,
};
use package_pricing::infrastructure::{AppConfig, init_tracing};
use package_pricing::{SelectionAction, ServiceYear};
use std::io;
use std::path::PathBuf;

/// Quote an event-service package.
#[derive(Debug, Parser)]
#[command(name = "package-pricing", version, about)]
struct Cli {
    /// Configuration file (defaults to ./package-pricing.toml if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pricing year; falls back to pricing.default_year.
    #[arg(short, long)]
    year: Option<ServiceYear>,

    /// Print the base price of every service instead of quoting.
    #[arg(long)]
    table: bool,

    /// Actions applied in order, e.g. `select:photography`.
    actions: Vec<SelectionAction>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(config.logging()).context("failed to initialise logging")?;

    let year = resolve_year(cli.year, config.pricing());
    tracing::info!(%year, actions = cli.actions.len(), "starting package-pricing");

    let mut out = io::stdout().lock();
    if cli.table {
        write_price_table(&mut out, year).context("failed to write price table")?;
    } else {
        let breakdown = quote_actions(year, cli.actions);
        write_quote(&mut out, &breakdown).context("failed to write quote")?;
    }
    Ok(())
}
