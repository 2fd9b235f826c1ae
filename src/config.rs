//! Harness configuration.
//!
//! The defaults reproduce the fixed contract: `http://localhost` and a single
//! one-second wait before reading an order back. Environment overrides are
//! optional; with none set the run is identical to the defaults.

use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::HarnessError;

pub const ENV_BASE_URL: &str = "ORDER_HARNESS_BASE_URL";
pub const ENV_WAIT: &str = "ORDER_HARNESS_WAIT";
pub const ENV_WAIT_MS: &str = "ORDER_HARNESS_WAIT_MS";
pub const ENV_POLL_TIMEOUT_MS: &str = "ORDER_HARNESS_POLL_TIMEOUT_MS";

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(10);

/// How the harness waits for the service to finish processing an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStrategy {
    /// Sleep once, then read once. No re-check if the order is unfinished.
    FixedDelay(Duration),
    /// Read every `interval` until the order is terminal or `timeout` elapses.
    Poll { interval: Duration, timeout: Duration },
}

impl Default for WaitStrategy {
    fn default() -> Self {
        WaitStrategy::FixedDelay(DEFAULT_SETTLE_DELAY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub base_url: String,
    pub wait: WaitStrategy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wait: WaitStrategy::default(),
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_wait(mut self, wait: WaitStrategy) -> Self {
        self.wait = wait;
        self
    }

    /// Load overrides from the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`, which returns the value of a variable
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            let base_url = base_url.trim();
            if base_url.is_empty() {
                return Err(HarnessError::Config(format!("{} is empty", ENV_BASE_URL)));
            }
            config.base_url = base_url.to_string();
        }

        let wait_ms = lookup(ENV_WAIT_MS)
            .map(|v| parse_millis(ENV_WAIT_MS, &v))
            .transpose()?;

        let mode = lookup(ENV_WAIT).map(|m| m.trim().to_ascii_lowercase());
        config.wait = match mode.as_deref() {
            None | Some("fixed") => {
                if lookup(ENV_POLL_TIMEOUT_MS).is_some() {
                    return Err(HarnessError::Config(format!(
                        "{} only applies when {}=poll",
                        ENV_POLL_TIMEOUT_MS, ENV_WAIT
                    )));
                }
                WaitStrategy::FixedDelay(wait_ms.unwrap_or(DEFAULT_SETTLE_DELAY))
            }
            Some("poll") => {
                if wait_ms == Some(Duration::ZERO) {
                    return Err(HarnessError::Config(format!(
                        "{} must be greater than zero in poll mode",
                        ENV_WAIT_MS
                    )));
                }
                let timeout = lookup(ENV_POLL_TIMEOUT_MS)
                    .map(|v| parse_millis(ENV_POLL_TIMEOUT_MS, &v))
                    .transpose()?
                    .unwrap_or(DEFAULT_POLL_TIMEOUT);
                WaitStrategy::Poll {
                    interval: wait_ms.unwrap_or(DEFAULT_POLL_INTERVAL),
                    timeout,
                }
            }
            Some(other) => {
                return Err(HarnessError::Config(format!(
                    "{} must be `fixed` or `poll`, got {:?}",
                    ENV_WAIT, other
                )))
            }
        };

        Ok(config)
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, HarnessError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| HarnessError::Config(format!("{}={:?}: {}", key, value, e)))
}
