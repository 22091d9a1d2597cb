//! Shared fixtures for probe integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// A temporary working directory holding one file to scan.
pub struct ProbeEnv {
    tmp: TempDir,
    pub target: PathBuf,
}

impl ProbeEnv {
    pub fn with_contents(contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let target = tmp.path().join("screen.dart");
        fs::write(&target, contents).expect("write target");
        Self { tmp, target }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    /// `count-parens` pointed at the fixture through `PAREN_PROBE_PATH`.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("count-parens");
        cmd.current_dir(self.dir())
            .env("PAREN_PROBE_PATH", &self.target)
            .env_remove("PAREN_PROBE_TAIL_LINES")
            .env_remove("LOG_FORMAT");
        cmd
    }
}

/// Dart-like source with a stray closing parenthesis at `stray_line`.
pub fn widget_source(lines: usize, stray_line: usize) -> String {
    (1..=lines)
        .map(|n| {
            if n == stray_line {
                "    ),".to_string()
            } else if n % 10 == 0 {
                format!("    Text('row {n}'),")
            } else {
                format!("    // line {n}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
