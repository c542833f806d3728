//! Error types for the File-Engine remote client.
//!
//! Failures fall into three classes, mirroring how the service reports
//! them: logical failures (HTTP 200 with a non-success envelope code),
//! HTTP failures (non-200 status), and transport failures (no response
//! at all).

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Main error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP 200 but the envelope carried a failure code.
    ///
    /// The full envelope is preserved: `code`, the service's `message`,
    /// and the unstripped `data` payload.
    #[error("Service error {code}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        code: i64,
        message: Option<String>,
        data: Value,
    },

    /// The service answered with a non-200 status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request timed out before a response was received.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure without a response (connection refused,
    /// DNS, TLS).
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body could not be decoded.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The operation was cancelled via its cancellation token.
    #[error("Operation cancelled")]
    Cancelled,

    /// Invalid client configuration.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ClientError {
    /// True for failures where no response was obtained from the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::Network { .. })
    }

    /// The envelope failure code, if this is a logical failure.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
