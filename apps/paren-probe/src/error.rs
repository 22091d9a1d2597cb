//! Error types for the probe.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// Missing file, permission problem or non-UTF-8 content.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
