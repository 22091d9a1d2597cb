//! count-parens
//!
//! Prints bracket totals and a cumulative balance trace for one file. The
//! target is fixed unless `PAREN_PROBE_PATH` overrides it.

use anyhow::Context;
use clap::Parser;
use paren_probe::{Settings, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "count-parens",
    version,
    about = "Locate parenthesis imbalance in a single source file"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();
    telemetry::init_tracing();

    let settings = Settings::from_env();
    let mut stdout = std::io::stdout().lock();
    paren_probe::run(&settings, &mut stdout).context("bracket scan failed")?;
    Ok(())
}
