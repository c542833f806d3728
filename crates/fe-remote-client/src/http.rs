//! HTTP client wrapper with envelope normalization.
//!
//! Wraps a shared `reqwest::Client` (60-second timeout, library user
//! agent) and funnels every JSON response through the service's
//! `{code, message, data}` envelope protocol:
//!
//! - HTTP 200 with a success envelope resolves to the inner `data`,
//! - HTTP 200 with a failure code becomes [`ClientError::Api`],
//! - any other status becomes [`ClientError::Status`],
//! - transport failures (timeout, no connection) become
//!   [`ClientError::Timeout`] / [`ClientError::Network`].

use crate::cancel::CancellationToken;
use crate::config::{ClientConfig, NetworkConfig};
use crate::envelope::Envelope;
use crate::{ClientError, Result};
use futures::StreamExt;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client wrapper shared by all operations of a client instance.
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Create a wrapper from the given configuration.
    ///
    /// Fails if the configuration is invalid or the underlying client
    /// cannot be constructed; both surface to the caller rather than
    /// being swallowed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
        })
    }

    /// Make a GET request and normalize the envelope.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.build_url(path, query);
        debug!("GET {}", url);
        self.execute_json(self.client.get(&url), &url).await
    }

    /// Make a POST request with an empty body and normalize the envelope.
    ///
    /// The service takes its POST parameters from the query string; the
    /// request body is always empty.
    pub async fn post(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.build_url(path, query);
        debug!("POST {}", url);
        self.execute_json(self.client.post(&url), &url).await
    }

    /// Make a GET request expecting a binary body.
    ///
    /// No envelope parsing happens on this path. The body is read chunk
    /// by chunk with a cancellation check between chunks.
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        let url = self.build_url(path, query);
        debug!("GET {} (binary)", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} returned HTTP {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut bytes = match response.content_length() {
            Some(len) => Vec::with_capacity(len as usize),
            None => Vec::new(),
        };
        let mut stream = response.bytes_stream();

        cancel.check()?;
        while let Some(chunk) = stream.next().await {
            cancel.check()?;
            let chunk = chunk.map_err(|e| self.transport_error(&url, e))?;
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }

    // Internal methods

    /// Build the full URL from base, path and query pairs.
    ///
    /// Query values are URL-encoded; keys are used verbatim.
    fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        let mut separator = '?';
        for (key, value) in query {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }
        url
    }

    async fn execute_json(&self, request: reqwest::RequestBuilder, url: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned HTTP {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(url, e))?;
        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| ClientError::Json {
            message: format!("Failed to parse response envelope: {}", e),
            source: Some(e),
        })?;

        if !envelope.is_success() {
            warn!(
                "{} returned failure envelope (code {:?})",
                url, envelope.code
            );
        }
        envelope.into_result()
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Network {
                message: format!("Request to {} failed: {}", url, err),
                source: Some(err),
            }
        }
    }
}
