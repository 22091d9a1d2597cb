//! Probe configuration derived from environment variables.
//!
//! - `PAREN_PROBE_PATH`: file to scan, relative to the working directory
//! - `PAREN_PROBE_TAIL_LINES`: size of the trailing trace window (default: 140)

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET: &str =
    "lib/src/features/conductor/presentation/screens/conductor_searching_passengers_screen.dart";
pub const DEFAULT_TAIL_LINES: usize = 140;

fn env_trim(name: &str) -> String {
    env::var(name).unwrap_or_default().trim().to_string()
}

#[derive(Clone, Debug)]
pub struct Settings {
    path: PathBuf,
    tail_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET),
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let path = env_trim("PAREN_PROBE_PATH");
        let path = if path.is_empty() {
            PathBuf::from(DEFAULT_TARGET)
        } else {
            PathBuf::from(path)
        };

        let tail_lines = env_trim("PAREN_PROBE_TAIL_LINES")
            .parse::<usize>()
            .unwrap_or(DEFAULT_TAIL_LINES);

        Self { path, tail_lines }
    }

    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_tail_lines(mut self, tail_lines: usize) -> Self {
        self.tail_lines = tail_lines;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tail_lines(&self) -> usize {
        self.tail_lines
    }
}
