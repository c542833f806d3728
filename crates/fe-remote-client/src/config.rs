//! Client configuration.
//!
//! The base URL is injected explicitly instead of being read from a
//! process-wide environment flag: construct a [`ClientConfig`] for the
//! origin you want to talk to and hand it to the client.

use crate::{ClientError, Result};
use std::time::Duration;

/// Network-related constants.
pub struct NetworkConfig;

impl NetworkConfig {
    /// Default timeout applied to every request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
    /// Origin of a locally running File-Engine remote service.
    pub const DEV_BASE_URL: &'static str = "http://localhost:23333";
    /// User agent sent with every request.
    pub const USER_AGENT: &'static str = "fe-remote-client/0.1";
}

/// Configuration for a [`FileEngineClient`](crate::FileEngineClient).
///
/// Two ready-made constructors cover the common deployments:
/// [`ClientConfig::development`] targets a local service instance, and
/// [`ClientConfig::same_origin`] issues relative requests for clients
/// embedded behind the service itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration targeting an explicit origin.
    ///
    /// A trailing slash on `base_url` is stripped so paths can always be
    /// appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        }
    }

    /// Configuration for a locally running service on its default port.
    pub fn development() -> Self {
        Self::new(NetworkConfig::DEV_BASE_URL)
    }

    /// Configuration issuing same-origin relative requests (empty base).
    pub fn same_origin() -> Self {
        Self::new("")
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate the configuration.
    ///
    /// An empty base URL is valid (relative requests); anything else must
    /// parse as an absolute URL.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Ok(());
        }
        url::Url::parse(&self.base_url).map_err(|e| ClientError::Config {
            message: format!("Invalid base URL {:?}: {}", self.base_url, e),
        })?;
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::same_origin()
    }
}
