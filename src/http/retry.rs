//! Retry policies for the HTTP transport.
//!
//! Retry is owned entirely by this layer: request builders and the pagination
//! helper never retry on their own.

use std::time::Duration;

/// Retry policy attached to a single request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries. Default for mutating (POST/PUT/DELETE) endpoints.
    #[default]
    None,
    /// Retry transport faults plus 429/502/503/504 with exponential backoff.
    /// Default for GET endpoints.
    Idempotent,
    /// Caller-provided configuration.
    Custom(RetryConfig),
}

/// Backoff configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retry attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Ceiling for the computed delay.
    pub max_delay: Duration,
    /// Delay multiplier per attempt.
    pub backoff_factor: f64,
    /// Randomize each delay by ±25% to avoid retry stampedes.
    pub jitter: bool,
    /// Response statuses that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(15),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Config for idempotent requests: also retries 429, since DocuSign
    /// rate-limits per account-hour.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Delay before retry `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = exp.min(self.max_delay.as_millis() as f64);
        let millis = if self.jitter {
            let spread = capped * 0.25;
            let offset = (rand::random::<f64>() * 2.0 - 1.0) * spread;
            (capped + offset).max(0.0)
        } else {
            capped
        };
        Duration::from_millis(millis as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn test_idempotent_config_retries_rate_limits() {
        let config = RetryConfig::idempotent();
        assert!(config.retryable_statuses.contains(&429));
        assert!(config.retryable_statuses.contains(&503));
    }

    #[test]
    fn test_delay_doubles_without_jitter() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(100),
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_delay_respects_ceiling() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_millis(1200),
            backoff_factor: 4.0,
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_attempt(5).as_millis(), 1200);
    }

    #[test]
    fn test_jitter_stays_within_spread() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(1000),
            jitter: true,
            ..RetryConfig::default()
        };
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((750..=1250).contains(&ms), "delay {ms}ms out of jitter range");
        }
    }
}
