//! Scan properties over generated and hand-written sources.

mod common;

use std::fs;

use paren_probe::scan::{self, BracketTotals};
use paren_probe::{ProbeError, Report, Settings};
use tempfile::TempDir;

fn samples() -> Vec<String> {
    vec![
        String::new(),
        "a(b)\nc(d\ne)f)".to_string(),
        "build(context) {\n  return Scaffold(\n    body: Column(),\n  );\n}\n".to_string(),
        "))\n((((\n".to_string(),
        common::widget_source(300, 250),
        common::widget_source(50, 0),
    ]
}

/// Totals and the full pass agree on the paren balance.
#[test]
fn totals_match_full_pass_balance() {
    for text in samples() {
        let totals = BracketTotals::count(&text);
        assert_eq!(totals.paren_balance(), scan::whole_balance(&text), "{text:?}");
    }
}

/// No first-negative line exactly when the running balance never dips.
#[test]
fn first_negative_none_iff_never_negative() {
    for text in samples() {
        let dips = scan::cumulative(&text).any(|(_, balance, _)| balance < 0);
        let first = scan::first_negative(&text).first_negative;
        assert_eq!(first.is_none(), !dips, "{text:?}");

        if let Some(line) = first {
            let (_, balance, _) = scan::cumulative(&text)
                .find(|&(n, _, _)| n == line)
                .expect("line exists");
            assert!(balance < 0);
            assert!(
                scan::cumulative(&text)
                    .take(line - 1)
                    .all(|(_, balance, _)| balance >= 0)
            );
        }
    }
}

#[test]
fn three_line_scenario() {
    let text = "a(b)\nc(d\ne)f)";
    let balances: Vec<i64> = scan::cumulative(text).map(|(_, b, _)| b).collect();
    assert_eq!(balances, vec![0, 1, -1]);
    assert_eq!(scan::first_negative(text).first_negative, Some(3));
}

/// Trace rows stay inside the window and always carry a parenthesis.
#[test]
fn trace_rows_respect_window() {
    let text = common::widget_source(300, 250);
    let rows = scan::tail_trace(&text, 140);

    assert!(!rows.is_empty());
    for row in &rows {
        assert!(row.line_number >= 160);
        assert!(row.text.contains('(') || row.text.contains(')'));
    }
    assert!(rows.iter().any(|row| row.line_number == 250 && row.balance == -1));
}

#[test]
fn run_writes_report_for_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("screen.dart");
    fs::write(&path, "a(b)\nc(d\ne)f)\n").unwrap();

    let mut out = Vec::new();
    let report = paren_probe::run(&Settings::for_path(&path), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report, Report::build("a(b)\nc(d\ne)f)\n", 140));
    assert!(text.starts_with("paren_open 2 paren_close 3\n"));
    assert!(text.contains("first_negative 3\n"));
}

/// Old Mac line endings and form feeds number lines like LF files.
#[test]
fn run_numbers_cr_and_form_feed_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("screen.dart");
    fs::write(&path, "a(b)\rc(d\x0ce)f)\r").unwrap();

    let mut out = Vec::new();
    let report = paren_probe::run(&Settings::for_path(&path), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report, Report::build("a(b)\nc(d\ne)f)\n", 140));
    assert!(text.contains("first_negative 3\n"));
    assert!(text.ends_with("   3 cum= -1 | e)f)\n"));
}

#[test]
fn run_fails_on_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.dart");

    let mut out = Vec::new();
    let err = paren_probe::run(&Settings::for_path(&path), &mut out).unwrap_err();

    assert!(matches!(err, ProbeError::Read { .. }));
    assert!(out.is_empty());
}

#[test]
fn run_fails_on_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("binary.dart");
    fs::write(&path, [0x28, 0xFF, 0xFE, 0x29]).unwrap();

    let err = paren_probe::run(&Settings::for_path(&path), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, ProbeError::Read { .. }));
}
