//! Constructor-time client configuration.

use std::time::Duration;

use crate::http::{MAX_RETRIES, RETRY_DELAY, RetryPolicy};

/// Base URL of the Nord Pool data portal API.
pub const API_URL: &str = "https://dataportal-api.nordpoolgroup.com/api";

/// Total timeout of a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Market queried unless another one is requested.
pub const DEFAULT_MARKET: &str = "DayAhead";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub max_retries: usize,
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: MAX_RETRIES,
            retry_delay: RETRY_DELAY,
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            delay: self.retry_delay,
        }
    }

    /// Full URL of an API path, tolerating slashes on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, API_URL);
        assert_eq!(config.timeout, Duration::from_secs(8));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::default()
            .with_api_url("http://localhost:1234")
            .with_timeout(Duration::from_secs(1))
            .with_max_retries(0)
            .with_retry_delay(Duration::ZERO);

        assert_eq!(config.api_url, "http://localhost:1234");
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(
            config.retry_policy(),
            RetryPolicy {
                max_retries: 0,
                delay: Duration::ZERO
            }
        );
    }

    #[test]
    fn test_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint("DayAheadPrices"),
            "https://dataportal-api.nordpoolgroup.com/api/DayAheadPrices"
        );

        let config = config.with_api_url("http://localhost:1234/");
        assert_eq!(
            config.endpoint("/DayAheadPrices"),
            "http://localhost:1234/DayAheadPrices"
        );
    }
}
