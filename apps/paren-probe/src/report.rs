//! Plain-text diagnostic report.

use std::fmt;

use crate::scan::{self, BracketTotals, NegativeScan, TraceRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub totals: BracketTotals,
    pub negative: NegativeScan,
    pub whole_balance: i64,
    pub trace: Vec<TraceRow>,
}

impl Report {
    /// Run both passes over `text`, tracing the last `window` lines.
    pub fn build(text: &str, window: usize) -> Self {
        Self {
            totals: BracketTotals::count(text),
            negative: scan::first_negative(text),
            whole_balance: scan::whole_balance(text),
            trace: scan::tail_trace(text, window),
        }
    }

    /// The `final cum` line reports where the early-exit scan stopped, which
    /// differs from the whole-file balance once a line went negative.
    pub fn final_balance_is_stale(&self) -> bool {
        self.negative.stopped_balance != self.whole_balance
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = &self.totals;
        writeln!(
            f,
            "paren_open {} paren_close {}",
            totals.paren_open, totals.paren_close
        )?;
        writeln!(
            f,
            "braces_open {} braces_close {}",
            totals.brace_open, totals.brace_close
        )?;
        match self.negative.first_negative {
            Some(line) => writeln!(f, "first_negative {line}")?,
            None => writeln!(f, "first_negative None")?,
        }
        writeln!(f, "final cum {}", self.negative.stopped_balance)?;
        writeln!(f, "whole_file cum {}", self.whole_balance)?;
        for row in &self.trace {
            writeln!(
                f,
                "{:4} cum={:3} | {}",
                row.line_number, row.balance, row.text
            )?;
        }
        Ok(())
    }
}
