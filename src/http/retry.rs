//! Retry policy for HTTP requests.

use std::time::Duration;

/// Outcome of a single attempt, as seen by a retry predicate.
#[derive(Debug)]
pub enum Attempt<'a> {
    /// The server answered with this status code.
    Status(u16),
    /// The request never produced a response.
    Transport(&'a reqwest::Error),
}

/// Decides whether an attempt should be retried.
pub type RetryPredicate = fn(&Attempt<'_>) -> bool;

/// Retries transport failures, 429 and 5xx except 501.
pub fn default_retry_policy(attempt: &Attempt<'_>) -> bool {
    match attempt {
        Attempt::Status(status) => *status == 429 || (*status >= 500 && *status != 501),
        Attempt::Transport(err) => err.is_connect() || err.is_timeout() || err.is_request(),
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay before the first retry.
    pub wait_min: Duration,
    /// Upper bound for any delay, including a server-sent `Retry-After`.
    pub wait_max: Duration,
    /// Whether to add ±25% jitter to computed delays.
    pub jitter: bool,
    pub retry_if: RetryPredicate,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            wait_min: Duration::from_secs(1),
            wait_max: Duration::from_secs(60),
            jitter: false,
            retry_if: default_retry_policy,
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn should_retry(&self, attempt: &Attempt<'_>) -> bool {
        (self.retry_if)(attempt)
    }

    /// Delay before retry number `attempt + 1` (0-indexed).
    ///
    /// `retry_after` is the server's `Retry-After` hint; it replaces the
    /// exponential delay when present.
    pub fn delay_for_attempt(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(hint) = retry_after {
            return hint.min(self.wait_max);
        }

        let base = self.wait_min.as_millis() as f64 * 2f64.powi(attempt as i32);
        let capped = base.min(self.wait_max.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).clamp(0.0, self.wait_max.as_millis() as f64)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

/// Parses a `Retry-After` header given in seconds. HTTP-date values are ignored.
pub(crate) fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(wait_min_ms: u64, wait_max_ms: u64) -> RetryConfig {
        RetryConfig {
            wait_min: Duration::from_millis(wait_min_ms),
            wait_max: Duration::from_millis(wait_max_ms),
            ..RetryConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.wait_min, Duration::from_secs(1));
        assert_eq!(config.wait_max, Duration::from_secs(60));
    }

    #[test]
    fn test_default_policy_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(default_retry_policy(&Attempt::Status(status)), "{status}");
        }
        for status in [200, 400, 401, 404, 409, 501] {
            assert!(!default_retry_policy(&Attempt::Status(status)), "{status}");
        }
    }

    #[test]
    fn test_delay_doubles() {
        let config = config(100, 10_000);
        assert_eq!(config.delay_for_attempt(0, None).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1, None).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2, None).as_millis(), 400);
    }

    #[test]
    fn test_delay_caps_at_max() {
        let config = config(1000, 2000);
        assert_eq!(config.delay_for_attempt(3, None).as_millis(), 2000);
    }

    #[test]
    fn test_retry_after_overrides_and_is_capped() {
        let config = config(100, 5000);
        assert_eq!(
            config.delay_for_attempt(0, Some(Duration::from_secs(2))),
            Duration::from_secs(2)
        );
        assert_eq!(
            config.delay_for_attempt(0, Some(Duration::from_secs(120))),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let config = RetryConfig {
            jitter: true,
            ..config(1000, 60_000)
        };
        for _ in 0..100 {
            let ms = config.delay_for_attempt(0, None).as_millis();
            assert!((750..=1250).contains(&ms), "{ms}");
        }
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("120"), Some(Duration::from_secs(120)));
        assert_eq!(parse_retry_after(" 3 "), Some(Duration::from_secs(3)));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
