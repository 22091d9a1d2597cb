#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! Mock Biometric Verification
//!
//! Placeholder for the face-recognition service used during driver
//! onboarding. The backend shells out to `verify-face` with a selfie, an
//! identity-document image and a JSON list of blocked-face images, then reads
//! one JSON line from stdout.
//!
//! No image is ever decoded. After a simulated delay the stub only checks
//! that both images can be opened and reports the configured
//! [`strategy::VerificationStrategy`] result (always `verified` by default).

pub mod cli;
pub mod error;
pub mod outcome;
pub mod output;
pub mod settings;
pub mod strategy;
pub mod telemetry;
pub mod verify;

pub use error::{VerifyError, VerifyResult};
pub use outcome::{VerificationRequest, VerificationResult, VerificationStatus};
pub use settings::Settings;
pub use strategy::{StrategyKind, VerificationStrategy};
pub use verify::{Verifier, verify};
