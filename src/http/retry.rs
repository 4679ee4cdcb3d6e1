//! Response classification and the retry policy applied to it.

use log::debug;
use reqwest::StatusCode;
use std::time::Duration;

use super::transport::RawResponse;
use crate::error::NordPoolError;

/// Maximum number of retries after the first attempt.
pub const MAX_RETRIES: usize = 3;

/// Delay between attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(7);

/// Bounded retry with a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Total number of attempts, the first one included.
    pub fn max_attempts(&self) -> usize {
        self.max_retries.saturating_add(1)
    }
}

/// Classifies the outcome of one transport call.
///
/// `Ok` carries the body of a 200 response. Every other outcome maps to the error
/// kind that decides whether the call is retried.
pub fn classify(result: anyhow::Result<RawResponse>) -> Result<Vec<u8>, NordPoolError> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            debug!("Transport error: {:#}", e);
            return Err(NordPoolError::Transport(e));
        }
    };

    let status = response.status;
    debug!("Response status {}", status.as_u16());

    match status {
        StatusCode::NO_CONTENT => Err(NordPoolError::EmptyResponse),
        StatusCode::OK => Ok(response.body),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(NordPoolError::Authentication { status })
        }
        s if s.as_u16() >= 500 => Err(NordPoolError::Server {
            status,
            body: response.text(),
        }),
        _ => Err(NordPoolError::Response {
            status,
            body: response.text(),
        }),
    }
}
