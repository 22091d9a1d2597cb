//! verify-face
//!
//! Mock biometric verification entry point. Prints exactly one JSON line on
//! stdout; logs go to stderr.

use std::process::ExitCode;

use face_verifier::{
    Settings, VerificationResult, Verifier, VerifyError, VerifyResult, cli::Cli, output,
    telemetry,
};

async fn run() -> VerifyResult<VerificationResult> {
    let request = Cli::parse_args()?.into_request()?;

    let settings = Settings::from_env();
    settings.validate().map_err(VerifyError::InvalidConfig)?;

    tracing::debug!(
        strategy = %settings.strategy(),
        delay_ms = settings.delay_ms(),
        blocked = ?request.blocked,
        "Loaded settings"
    );

    let verifier = Verifier::new(&settings);
    Ok(verifier.verify(&request).await)
}

fn emit(result: &VerificationResult, code: u8) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    match output::write_json_line(&mut stdout, result) {
        Ok(()) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %err, "Failed to write result");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = env!("GIT_SHA"),
        build_time = env!("BUILD_TIME"),
        "Starting verify-face"
    );

    let exit = match run().await {
        Ok(result) => emit(&result, 0),
        Err(err) => {
            tracing::warn!(error = %err, "Verification not attempted");
            emit(&err.to_result(), err.exit_code())
        }
    };

    telemetry::shutdown_tracing();
    exit
}
