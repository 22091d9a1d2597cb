//! Pluggable decision returned once both images are confirmed readable.
//!
//! Test scenarios (mismatch, blocked identity) are selected through
//! `VERIFY_FACE_STRATEGY` instead of editing the mock.

use std::str::FromStr;

use crate::outcome::{VerificationRequest, VerificationResult};

/// Decides the result of a verification whose inputs exist.
///
/// Implementations receive the full request but the mock variants ignore
/// image contents and the blocked list.
pub trait VerificationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, request: &VerificationRequest) -> VerificationResult;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVerify;

impl VerificationStrategy for AlwaysVerify {
    fn name(&self) -> &'static str {
        "verify"
    }

    fn evaluate(&self, _request: &VerificationRequest) -> VerificationResult {
        VerificationResult::verified()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysMismatch;

impl VerificationStrategy for AlwaysMismatch {
    fn name(&self) -> &'static str {
        "mismatch"
    }

    fn evaluate(&self, _request: &VerificationRequest) -> VerificationResult {
        VerificationResult::mismatch()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysBlocked;

impl VerificationStrategy for AlwaysBlocked {
    fn name(&self) -> &'static str {
        "blocked"
    }

    fn evaluate(&self, _request: &VerificationRequest) -> VerificationResult {
        VerificationResult::blocked()
    }
}

/// Configured strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Verify,
    Mismatch,
    Blocked,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn VerificationStrategy> {
        match self {
            Self::Verify => Box::new(AlwaysVerify),
            Self::Mismatch => Box::new(AlwaysMismatch),
            Self::Blocked => Box::new(AlwaysBlocked),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verify" | "verified" => Ok(Self::Verify),
            "mismatch" => Ok(Self::Mismatch),
            "blocked" => Ok(Self::Blocked),
            other => Err(format!(
                "Invalid strategy '{other}'. Must be 'verify', 'mismatch' or 'blocked'."
            )),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verify => write!(f, "verify"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}
