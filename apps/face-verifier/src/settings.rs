//! Stub configuration derived from environment variables.
//!
//! ## Environment Variables
//!
//! - `VERIFY_FACE_DELAY_MS`: simulated processing time (default: 1000)
//! - `VERIFY_FACE_STRATEGY`: "verify", "mismatch" or "blocked" (default: verify)
//! - `RUST_LOG` / `LOG_FORMAT`: see [`crate::telemetry`]

use std::env;
use std::time::Duration;

use crate::strategy::StrategyKind;

const DEFAULT_DELAY_MS: u64 = 1_000;

fn env_trim(name: &str) -> String {
    env::var(name).unwrap_or_default().trim().to_string()
}

#[derive(Clone, Debug)]
pub struct Settings {
    delay_ms: u64,
    strategy: StrategyKind,
    config_errors: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            strategy: StrategyKind::Verify,
            config_errors: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_values(
            &env_trim("VERIFY_FACE_DELAY_MS"),
            &env_trim("VERIFY_FACE_STRATEGY"),
        )
    }

    /// Parse raw variable values. Empty means unset; anything else that
    /// does not parse is recorded and reported by [`Settings::validate`].
    pub fn from_values(raw_delay: &str, raw_strategy: &str) -> Self {
        let mut config_errors = Vec::new();

        let delay_ms = if raw_delay.is_empty() {
            DEFAULT_DELAY_MS
        } else {
            raw_delay.parse::<u64>().unwrap_or_else(|_| {
                config_errors.push(format!(
                    "VERIFY_FACE_DELAY_MS: expected milliseconds, got '{raw_delay}'"
                ));
                DEFAULT_DELAY_MS
            })
        };

        let strategy = if raw_strategy.is_empty() {
            StrategyKind::default()
        } else {
            raw_strategy.parse::<StrategyKind>().unwrap_or_else(|message| {
                config_errors.push(format!("VERIFY_FACE_STRATEGY: {message}"));
                StrategyKind::default()
            })
        };

        Self {
            delay_ms,
            strategy,
            config_errors,
        }
    }

    /// Settings without the simulated delay.
    pub fn for_tests() -> Self {
        Self {
            delay_ms: 0,
            ..Self::default()
        }
    }

    /// Fails when either variable was set to a value that does not parse.
    pub fn validate(&self) -> Result<(), String> {
        if self.config_errors.is_empty() {
            Ok(())
        } else {
            Err(self.config_errors.join("; "))
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }
}
