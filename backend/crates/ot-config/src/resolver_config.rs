use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Profile read constraints
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;

pub const MIN_RETRY_DELAY_MS: u64 = 0;
pub const MAX_RETRY_DELAY_MS: u64 = 10000;

pub const DEFAULT_PASSWORD_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_PASSWORD_RETRY_DELAY_MS: u64 = 1500;
pub const DEFAULT_FEDERATED_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_FEDERATED_RETRY_DELAY_MS: u64 = 1000;
pub const DEFAULT_DASHBOARD_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_DASHBOARD_RETRY_DELAY_MS: u64 = 1000;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 1.0;

pub const MIN_MAX_DELAY_SECS: u64 = 1;
pub const MAX_MAX_DELAY_SECS: u64 = 60;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 10;

pub const DEFAULT_JITTER: bool = false;

/// How long sign-in flows wait for a just-written profile to become readable.
///
/// Each path has its own attempt budget and delay. The delay is fixed unless
/// `backoff_multiplier` is raised above 1.0.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Reads after a password sign-in (including the first read)
    pub password_max_attempts: u32,
    pub password_retry_delay_ms: u64,
    /// Reads after a federated sign-in before auto-provisioning
    pub federated_max_attempts: u32,
    pub federated_retry_delay_ms: u64,
    /// Reads when a dashboard page is opened
    pub dashboard_max_attempts: u32,
    pub dashboard_retry_delay_ms: u64,
    /// Multiplier applied to the delay after each failed read
    pub backoff_multiplier: f64,
    /// Upper bound for a single delay in seconds
    pub max_delay_secs: u64,
    /// Scale delays by a random factor to spread out concurrent sign-ins
    pub jitter: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            password_max_attempts: DEFAULT_PASSWORD_MAX_ATTEMPTS,
            password_retry_delay_ms: DEFAULT_PASSWORD_RETRY_DELAY_MS,
            federated_max_attempts: DEFAULT_FEDERATED_MAX_ATTEMPTS,
            federated_retry_delay_ms: DEFAULT_FEDERATED_RETRY_DELAY_MS,
            dashboard_max_attempts: DEFAULT_DASHBOARD_MAX_ATTEMPTS,
            dashboard_retry_delay_ms: DEFAULT_DASHBOARD_RETRY_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let paths = [
            (
                "password",
                self.password_max_attempts,
                self.password_retry_delay_ms,
            ),
            (
                "federated",
                self.federated_max_attempts,
                self.federated_retry_delay_ms,
            ),
            (
                "dashboard",
                self.dashboard_max_attempts,
                self.dashboard_retry_delay_ms,
            ),
        ];

        for (path, attempts, delay_ms) in paths {
            if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&attempts) {
                return Err(ConfigError::resolver(format!(
                    "resolver.{}_max_attempts must be {}-{}, got {}",
                    path, MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, attempts
                )));
            }

            if !(MIN_RETRY_DELAY_MS..=MAX_RETRY_DELAY_MS).contains(&delay_ms) {
                return Err(ConfigError::resolver(format!(
                    "resolver.{}_retry_delay_ms must be {}-{}, got {}",
                    path, MIN_RETRY_DELAY_MS, MAX_RETRY_DELAY_MS, delay_ms
                )));
            }
        }

        if !(MIN_BACKOFF_MULTIPLIER..=MAX_BACKOFF_MULTIPLIER).contains(&self.backoff_multiplier) {
            return Err(ConfigError::resolver(format!(
                "resolver.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        if !(MIN_MAX_DELAY_SECS..=MAX_MAX_DELAY_SECS).contains(&self.max_delay_secs) {
            return Err(ConfigError::resolver(format!(
                "resolver.max_delay_secs must be {}-{}, got {}",
                MIN_MAX_DELAY_SECS, MAX_MAX_DELAY_SECS, self.max_delay_secs
            )));
        }

        Ok(())
    }

    pub fn password_retry_delay(&self) -> Duration {
        Duration::from_millis(self.password_retry_delay_ms)
    }

    pub fn federated_retry_delay(&self) -> Duration {
        Duration::from_millis(self.federated_retry_delay_ms)
    }

    pub fn dashboard_retry_delay(&self) -> Duration {
        Duration::from_millis(self.dashboard_retry_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }
}
