//! HTTP module: transport, response classification and retries.

mod client;
mod retry;
mod transport;

pub use client::HttpClient;
pub use retry::{MAX_RETRIES, RETRY_DELAY, RetryPolicy, classify};
#[cfg(test)]
pub use transport::MockTransport;
pub use transport::{RawResponse, ReqwestTransport, Transport};
