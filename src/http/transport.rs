//! Single HTTP GET with a total timeout.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode, header::HeaderMap};
use std::time::Duration;

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends GET requests.
///
/// An `Err` means no response was received at all; HTTP error statuses are returned
/// as a [`RawResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse>;
}

/// [`Transport`] over a shared reqwest session.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, query))]
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        debug!("Received HTTP {} ({} bytes)", status.as_u16(), body.len());

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_get_returns_status_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/DayAheadPrices")
            .match_query(Matcher::UrlEncoded("date".into(), "2024-01-01".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"currency": "EUR"}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Client::new(), Duration::from_secs(5));
        let response = transport
            .get(
                &format!("{}/DayAheadPrices", url),
                &[("date".to_string(), "2024-01-01".to_string())],
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.headers.get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(response.text(), r#"{"currency": "EUR"}"#);
    }

    #[tokio::test]
    async fn test_get_error_status_is_not_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/DayAheadPrices")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Client::new(), Duration::from_secs(5));
        let response = transport
            .get(&format!("{}/DayAheadPrices", url), &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.text(), "maintenance");
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        // Bind then drop a listener to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(Client::new(), Duration::from_secs(5));
        let result = transport.get(&format!("http://{}/", addr), &[]).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_times_out() {
        // Accepts connections (via the backlog) but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let transport = ReqwestTransport::new(Client::new(), Duration::from_millis(200));
        let result = transport.get(&format!("http://{}/", addr), &[]).await;

        let err = result.unwrap_err();
        let source = err.downcast_ref::<reqwest::Error>().unwrap();
        assert!(source.is_timeout());
        drop(listener);
    }

    #[test]
    fn test_raw_response_text_lossy() {
        let response = RawResponse::new(StatusCode::OK, vec![b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
        assert!(response.headers.is_empty());
    }
}
