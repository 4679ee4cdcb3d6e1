//! Error taxonomy for Nord Pool API calls.

use reqwest::StatusCode;
use std::fmt;

/// Maximum number of body characters shown in error messages.
const BODY_SNIPPET_LEN: usize = 200;

/// Errors returned by [`crate::NordPoolClient`].
#[derive(Debug)]
pub enum NordPoolError {
    /// No response was received (connection refused, DNS failure, timeout, ...)
    Transport(anyhow::Error),
    /// The server answered HTTP 204 with no data for the request
    EmptyResponse,
    /// The server refused access (HTTP 401 or 403)
    Authentication { status: StatusCode },
    /// The server failed to handle the request (HTTP 5xx)
    Server { status: StatusCode, body: String },
    /// Any other unexpected status
    Response { status: StatusCode, body: String },
    /// The response body could not be turned into delivery period data
    Decode(String),
    /// The HTTP session could not be built
    Client(reqwest::Error),
}

impl NordPoolError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Unexpected statuses other than 401/403 are retried like server errors.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NordPoolError::Transport(_)
                | NordPoolError::Server { .. }
                | NordPoolError::Response { .. }
        )
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NordPoolError::EmptyResponse => Some(StatusCode::NO_CONTENT),
            NordPoolError::Authentication { status }
            | NordPoolError::Server { status, .. }
            | NordPoolError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for NordPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NordPoolError::Transport(e) => write!(f, "Request to Nord Pool failed: {:#}", e),
            NordPoolError::EmptyResponse => {
                write!(f, "Status 204, empty response from server")
            }
            NordPoolError::Authentication { status } => {
                write!(f, "No access: HTTP {}", status.as_u16())
            }
            NordPoolError::Server { status, body } => write!(
                f,
                "Internal server error: HTTP {}: {}",
                status.as_u16(),
                snippet(body)
            ),
            NordPoolError::Response { status, body } => write!(
                f,
                "Unexpected response: HTTP {}: {}",
                status.as_u16(),
                snippet(body)
            ),
            NordPoolError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            NordPoolError::Client(e) => write!(f, "Failed to build HTTP client: {}", e),
        }
    }
}

impl std::error::Error for NordPoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NordPoolError::Transport(e) => Some(&**e),
            NordPoolError::Client(e) => Some(e),
            _ => None,
        }
    }
}

fn snippet(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(NordPoolError::Transport(anyhow::anyhow!("connection refused")).is_retryable());
        assert!(
            NordPoolError::Server {
                status: StatusCode::BAD_GATEWAY,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            NordPoolError::Response {
                status: StatusCode::NOT_FOUND,
                body: String::new()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(!NordPoolError::EmptyResponse.is_retryable());
        assert!(
            !NordPoolError::Authentication {
                status: StatusCode::FORBIDDEN
            }
            .is_retryable()
        );
        assert!(!NordPoolError::Decode("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_status() {
        assert_eq!(
            NordPoolError::EmptyResponse.status(),
            Some(StatusCode::NO_CONTENT)
        );
        assert_eq!(
            NordPoolError::Response {
                status: StatusCode::BAD_REQUEST,
                body: "nope".to_string()
            }
            .status(),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(NordPoolError::Decode("x".to_string()).status(), None);
    }

    #[test]
    fn test_display_includes_status_and_body() {
        let err = NordPoolError::Response {
            status: StatusCode::BAD_REQUEST,
            body: "Invalid delivery area".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Invalid delivery area"));

        let err = NordPoolError::Authentication {
            status: StatusCode::UNAUTHORIZED,
        };
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_display_truncates_long_body() {
        let err = NordPoolError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "x".repeat(1000),
        };
        let msg = err.to_string();
        assert!(msg.ends_with("..."));
        assert!(msg.len() < 300);
    }

    #[test]
    fn test_display_empty_body() {
        let err = NordPoolError::Server {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "  ".to_string(),
        };
        assert!(err.to_string().contains("<empty body>"));
    }

    #[test]
    fn test_transport_source_is_kept() {
        use std::error::Error;

        let err = NordPoolError::Transport(anyhow::anyhow!("dns lookup failed"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("dns lookup failed"));
    }
}
