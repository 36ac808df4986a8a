use ot_config::ResolverConfig;

use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_MAX_DELAY_SECS: u64 = 10;
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 1.0;

/// How often and how patiently a profile read is retried.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total reads, including the first. Never below 1.
    pub max_attempts: u32,
    /// Wait after the first failed read
    pub delay: Duration,
    /// Growth of the wait after each further failed read
    pub backoff_multiplier: f64,
    /// Upper bound for a single wait
    pub max_delay: Duration,
    /// Scale each wait by a random factor in [0.5, 1.5)
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_MAX_ATTEMPTS, Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl RetryPolicy {
    /// Fixed delay, no backoff, no jitter.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_delay: Duration::from_secs(DEFAULT_MAX_DELAY_SECS).max(delay),
            jitter: false,
        }
    }

    /// Single read, no waiting.
    pub fn once() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    /// After a password sign-in.
    pub fn password(config: &ResolverConfig) -> Self {
        Self::from_config(
            config,
            config.password_max_attempts,
            config.password_retry_delay(),
        )
    }

    /// After a federated sign-in, before falling back to provisioning.
    pub fn federated(config: &ResolverConfig) -> Self {
        Self::from_config(
            config,
            config.federated_max_attempts,
            config.federated_retry_delay(),
        )
    }

    /// When a dashboard is opened.
    pub fn dashboard(config: &ResolverConfig) -> Self {
        Self::from_config(
            config,
            config.dashboard_max_attempts,
            config.dashboard_retry_delay(),
        )
    }

    fn from_config(config: &ResolverConfig, max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            backoff_multiplier: config.backoff_multiplier.max(1.0),
            max_delay: config.max_delay(),
            jitter: config.jitter,
        }
    }

    /// Wait after failed read number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let base = self.delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);

        let scaled = if self.jitter {
            let jitter_factor = 0.5 + rand::random::<f64>(); // 0.5 to 1.5
            base * jitter_factor
        } else {
            base
        };

        let capped = scaled.min(self.max_delay.as_secs_f64());
        if capped.is_finite() && capped > 0.0 {
            Duration::from_secs_f64(capped)
        } else {
            Duration::ZERO
        }
    }
}
