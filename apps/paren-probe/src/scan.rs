//! Bracket counting and cumulative balance scans.
//!
//! Lines are split on every Unicode line boundary (see [`split_lines`]), so
//! CRLF, CR-only and LF files get the same line numbers. Line numbers are
//! 1-based.

/// Whole-text occurrence counts of the four bracket characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BracketTotals {
    pub paren_open: usize,
    pub paren_close: usize,
    pub brace_open: usize,
    pub brace_close: usize,
}

impl BracketTotals {
    pub fn count(text: &str) -> Self {
        text.bytes().fold(Self::default(), |mut totals, byte| {
            match byte {
                b'(' => totals.paren_open += 1,
                b')' => totals.paren_close += 1,
                b'{' => totals.brace_open += 1,
                b'}' => totals.brace_close += 1,
                _ => {}
            }
            totals
        })
    }

    /// Open minus close parentheses over the whole text.
    pub fn paren_balance(&self) -> i64 {
        self.paren_open as i64 - self.paren_close as i64
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Iterator over the lines of a text, separators excluded.
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((at, sep)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let line = &self.rest[..at];
        let mut end = at + sep.len_utf8();
        if sep == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}

/// Split on `\n`, `\r`, `\r\n`, vertical tab, form feed, the file/group/record
/// separators, NEL, U+2028 and U+2029. A trailing separator does not start
/// an extra empty line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

fn count_byte(line: &str, needle: u8) -> usize {
    line.bytes().filter(|&b| b == needle).count()
}

/// `(` count minus `)` count for one line.
pub fn paren_delta(line: &str) -> i64 {
    count_byte(line, b'(') as i64 - count_byte(line, b')') as i64
}

pub fn has_paren(line: &str) -> bool {
    line.bytes().any(|b| b == b'(' || b == b')')
}

/// Result of the early-exit scan for the first negative balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeScan {
    /// First line whose running balance is below zero.
    pub first_negative: Option<usize>,
    /// Running balance where the scan stopped. Equals the whole-file balance
    /// only when no line went negative.
    pub stopped_balance: i64,
}

pub fn first_negative(text: &str) -> NegativeScan {
    let mut balance = 0i64;
    for (index, line) in split_lines(text).enumerate() {
        balance += paren_delta(line);
        if balance < 0 {
            return NegativeScan {
                first_negative: Some(index + 1),
                stopped_balance: balance,
            };
        }
    }
    NegativeScan {
        first_negative: None,
        stopped_balance: balance,
    }
}

/// Running balance after every line.
pub fn cumulative(text: &str) -> impl Iterator<Item = (usize, i64, &str)> {
    split_lines(text)
        .enumerate()
        .scan(0i64, |balance, (index, line)| {
            *balance += paren_delta(line);
            Some((index + 1, *balance, line))
        })
}

/// Balance after a full pass that never stops early.
pub fn whole_balance(text: &str) -> i64 {
    cumulative(text).last().map_or(0, |(_, balance, _)| balance)
}

/// One line of the tail trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    pub line_number: usize,
    pub balance: i64,
    pub text: String,
}

/// First line included in a trace of the last `window` lines.
pub fn trace_start(total_lines: usize, window: usize) -> usize {
    total_lines.saturating_sub(window).max(1)
}

/// Running balance for lines at or after [`trace_start`] that contain a
/// parenthesis. The balance is accumulated from line 1.
pub fn tail_trace(text: &str, window: usize) -> Vec<TraceRow> {
    let start = trace_start(split_lines(text).count(), window);
    cumulative(text)
        .filter(|&(line_number, _, line)| line_number >= start && has_paren(line))
        .map(|(line_number, balance, line)| TraceRow {
            line_number,
            balance,
            text: line.trim().to_string(),
        })
        .collect()
}
