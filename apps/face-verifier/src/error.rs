//! Error types for the verification stub.
//!
//! Every error maps to the JSON body and exit code the calling backend
//! expects, in one place.

use std::path::PathBuf;

use thiserror::Error;

use crate::outcome::VerificationResult;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Missing arguments")]
    MissingArguments,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("File not found")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl VerifyError {
    /// Process exit code for this error.
    ///
    /// An unreadable input is reported in-band, so callers only ever see a
    /// non-zero exit for invocation problems.
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifyError::FileNotFound { .. } => 0,
            VerifyError::MissingArguments
            | VerifyError::InvalidArguments(_)
            | VerifyError::InvalidConfig(_)
            | VerifyError::Output(_)
            | VerifyError::Encoding(_) => 1,
        }
    }

    /// JSON body printed for this error.
    pub fn to_result(&self) -> VerificationResult {
        VerificationResult::error(self.to_string())
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::VerificationStatus;

    #[test]
    fn test_exit_codes() {
        assert_eq!(VerifyError::MissingArguments.exit_code(), 1);
        assert_eq!(VerifyError::InvalidConfig("x".to_string()).exit_code(), 1);
        let missing = VerifyError::FileNotFound {
            path: PathBuf::from("selfie.jpg"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(missing.exit_code(), 0);
    }

    #[test]
    fn test_error_bodies() {
        let body = VerifyError::MissingArguments.to_result();
        assert_eq!(body.status, VerificationStatus::Error);
        assert_eq!(body.message, "Missing arguments");

        let missing = VerifyError::FileNotFound {
            path: PathBuf::from("id.png"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(missing.to_result().message, "File not found");
    }
}
