//! HTTP client with built-in retry logic and error handling.

use log::{debug, warn};
use serde_json::Value;

use super::retry::{RetryPolicy, classify};
use super::transport::Transport;
use crate::error::NordPoolError;

/// HTTP client that retries transient failures of a single logical request.
#[derive(Clone)]
pub struct HttpClient<T: Transport> {
    transport: T,
    policy: RetryPolicy,
}

/// Bookkeeping for one logical request, dropped when it terminates.
#[derive(Debug)]
struct RetryState<'a> {
    attempts_remaining: usize,
    url: &'a str,
    query: &'a [(String, String)],
}

impl<'a> RetryState<'a> {
    fn new(policy: &RetryPolicy, url: &'a str, query: &'a [(String, String)]) -> Self {
        Self {
            attempts_remaining: policy.max_retries,
            url,
            query,
        }
    }

    /// Consumes one retry; `false` once the budget is spent.
    fn take_retry(&mut self) -> bool {
        if self.attempts_remaining == 0 {
            return false;
        }
        self.attempts_remaining -= 1;
        true
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// Server errors, unexpected statuses and transport failures are retried up to
    /// the policy's bound with a fixed delay; the last error is returned once the
    /// bound is reached. Empty and unauthorized responses fail immediately.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Value, NordPoolError> {
        let mut state = RetryState::new(&self.policy, url, query);

        loop {
            let attempt = (self.policy.max_retries - state.attempts_remaining).saturating_add(1);
            debug!(
                "Attempt {}/{}: GET {} with parameters {:?}",
                attempt,
                self.policy.max_attempts(),
                state.url,
                state.query
            );

            let outcome = classify(self.transport.get(state.url, state.query).await)
                .and_then(|body| decode_json(&body));

            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && state.take_retry() => {
                    warn!(
                        "GET {}: attempt {}/{} failed ({}), retrying in {}s...",
                        state.url,
                        attempt,
                        self.policy.max_attempts(),
                        e,
                        self.policy.delay.as_secs_f64()
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(e) => {
                    debug!("GET {}: giving up after attempt {}: {}", state.url, attempt, e);
                    return Err(e);
                }
            }
        }
    }
}

fn decode_json(body: &[u8]) -> Result<Value, NordPoolError> {
    serde_json::from_slice(body)
        .map_err(|e| NordPoolError::Decode(format!("response body is not valid JSON: {}", e)))
}
