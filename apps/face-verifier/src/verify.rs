//! Mock verification flow.
//!
//! Simulates the latency of a real face comparison, confirms both images
//! can be opened, then defers to the configured [`VerificationStrategy`].

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{VerifyError, VerifyResult};
use crate::outcome::{VerificationRequest, VerificationResult};
use crate::settings::Settings;
use crate::strategy::VerificationStrategy;

pub struct Verifier {
    delay: Duration,
    strategy: Box<dyn VerificationStrategy>,
}

impl Verifier {
    pub fn new(settings: &Settings) -> Self {
        Self::with_strategy(settings.delay(), settings.strategy().build())
    }

    pub fn with_strategy(delay: Duration, strategy: Box<dyn VerificationStrategy>) -> Self {
        Self { delay, strategy }
    }

    /// Run one verification, folding input errors into the result body.
    #[tracing::instrument(skip_all, fields(strategy = self.strategy.name()))]
    pub async fn verify(&self, request: &VerificationRequest) -> VerificationResult {
        match self.try_verify(request).await {
            Ok(result) => result,
            Err(VerifyError::FileNotFound { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "Verification input not readable");
                VerificationResult::file_not_found()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Verification failed");
                err.to_result()
            }
        }
    }

    pub async fn try_verify(&self, request: &VerificationRequest) -> VerifyResult<VerificationResult> {
        let start = Instant::now();
        tracing::debug!(
            selfie = %request.selfie.display(),
            id_doc = %request.id_doc.display(),
            blocked = request.blocked.len(),
            "Starting mock verification"
        );

        // Not cancellable: the caller always waits the full delay.
        tokio::time::sleep(self.delay).await;

        ensure_readable(&request.selfie).await?;
        ensure_readable(&request.id_doc).await?;

        let result = self.strategy.evaluate(request);
        tracing::info!(
            status = %result.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Mock verification finished"
        );
        Ok(result)
    }
}

/// Open `path` for reading and drop the handle.
async fn ensure_readable(path: &Path) -> VerifyResult<()> {
    let not_found = |source: std::io::Error| VerifyError::FileNotFound {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(not_found)?;
    let metadata = file.metadata().await.map_err(not_found)?;
    if metadata.is_dir() {
        return Err(not_found(std::io::Error::from(
            std::io::ErrorKind::IsADirectory,
        )));
    }
    Ok(())
}

/// Verify with default settings: one second of simulated work and the
/// always-verify strategy. `blocked` has no effect on the result.
pub async fn verify(selfie: &Path, id_doc: &Path, blocked: &[PathBuf]) -> VerificationResult {
    let request = VerificationRequest::new(selfie, id_doc).with_blocked(blocked.to_vec());
    Verifier::new(&Settings::default()).verify(&request).await
}
