//! Request and result types exchanged with the calling backend.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const VERIFIED_MESSAGE: &str = "Biometric verification successful (MOCK)";
pub const MISMATCH_MESSAGE: &str = "Face does not match identity document (MOCK)";
pub const BLOCKED_MESSAGE: &str = "Face matches a blocked identity (MOCK)";
pub const FILE_NOT_FOUND_MESSAGE: &str = "File not found";

/// Outcome reported in the `status` field.
///
/// The backend maps `verified` and `blocked` to account states and treats
/// everything else as a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Mismatch,
    Blocked,
    Error,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::Blocked => write!(f, "blocked"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub status: VerificationStatus,
    pub message: String,
}

impl VerificationResult {
    pub fn new(status: VerificationStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn verified() -> Self {
        Self::new(VerificationStatus::Verified, VERIFIED_MESSAGE)
    }

    pub fn mismatch() -> Self {
        Self::new(VerificationStatus::Mismatch, MISMATCH_MESSAGE)
    }

    pub fn blocked() -> Self {
        Self::new(VerificationStatus::Blocked, BLOCKED_MESSAGE)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(VerificationStatus::Error, message)
    }

    pub fn file_not_found() -> Self {
        Self::error(FILE_NOT_FOUND_MESSAGE)
    }
}

/// Inputs of a single verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub selfie: PathBuf,
    pub id_doc: PathBuf,
    /// Accepted for interface compatibility, never inspected.
    pub blocked: Vec<PathBuf>,
}

impl VerificationRequest {
    pub fn new(selfie: impl Into<PathBuf>, id_doc: impl Into<PathBuf>) -> Self {
        Self {
            selfie: selfie.into(),
            id_doc: id_doc.into(),
            blocked: Vec::new(),
        }
    }

    pub fn with_blocked(mut self, blocked: Vec<PathBuf>) -> Self {
        self.blocked = blocked;
        self
    }
}
