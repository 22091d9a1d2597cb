#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_wrap)] // Counts are far below i64::MAX

//! Parenthesis Balance Probe
//!
//! Locates a bracket imbalance in one source file: totals for `(`, `)`,
//! `{`, `}`, the first line where the running `(`-minus-`)` balance goes
//! negative, and a trace of the running balance over the file's tail.

use std::io::Write;

pub mod error;
pub mod report;
pub mod scan;
pub mod settings;

pub mod telemetry {
    //! Console tracing on stderr; stdout carries the report.

    use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

    pub fn init_tracing() {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "paren_probe=warn".into());
        let json = std::env::var("LOG_FORMAT")
            .map(|value| value.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        let fmt_layer = if json {
            fmt_layer.json().boxed()
        } else {
            fmt_layer.boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}

pub use error::{ProbeError, ProbeResult};
pub use report::Report;
pub use settings::Settings;

/// Read the configured file, write the report to `out` and return it.
#[tracing::instrument(skip_all, fields(path = %settings.path().display()))]
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> ProbeResult<Report> {
    let text = std::fs::read_to_string(settings.path()).map_err(|source| ProbeError::Read {
        path: settings.path().to_path_buf(),
        source,
    })?;

    let report = Report::build(&text, settings.tail_lines());
    tracing::debug!(
        lines = scan::split_lines(&text).count(),
        trace_rows = report.trace.len(),
        "Scanned file"
    );
    if report.final_balance_is_stale() {
        tracing::warn!(
            stopped_at = ?report.negative.first_negative,
            final_cum = report.negative.stopped_balance,
            whole_file_cum = report.whole_balance,
            "final cum reflects the stopped scan, not the whole file"
        );
    }

    write!(out, "{report}")?;
    out.flush()?;
    Ok(report)
}
