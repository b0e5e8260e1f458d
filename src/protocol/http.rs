// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Iris lights.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::endpoint::DeviceEndpoint;
use crate::error::{Error, TransportError};
use crate::protocol::Transport;

// ============================================================================
// HttpConfig - Configuration for an HTTP light
// ============================================================================

/// Configuration for an HTTP Iris light.
///
/// Holds the device address and the request timeout used when the bridge
/// builds its own HTTP client. Hosts that already own a shared client should
/// wrap it with [`HttpTransport::from_client`] instead; its timeout policy
/// then applies.
///
/// # Examples
///
/// ```
/// use iris_light::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40").with_timeout(Duration::from_secs(3));
/// assert_eq!(config.host(), "192.168.1.40");
/// assert_eq!(config.timeout(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the light, with optional port
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validates the host and derives the device endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the host is not a usable
    /// address.
    pub fn endpoint(&self) -> Result<DeviceEndpoint, Error> {
        DeviceEndpoint::new(self.host.clone())
    }

    /// Creates an `HttpTransport` with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the HTTP client cannot be
    /// created.
    pub fn into_transport(self) -> Result<HttpTransport, Error> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::InvalidConfiguration(format!("cannot build HTTP client: {e}")))?;
        Ok(HttpTransport::from_client(client))
    }
}

// ============================================================================
// HttpTransport - reqwest-backed transport
// ============================================================================

/// HTTP transport backed by a `reqwest` client.
///
/// Cloning is cheap; clones share the same connection pool.
///
/// # Examples
///
/// ```no_run
/// use iris_light::protocol::{HttpTransport, Transport};
///
/// # async fn example() -> Result<(), iris_light::TransportError> {
/// let transport = HttpTransport::from_client(reqwest::Client::new());
/// let body = transport.get("http://192.168.1.40/api/iris-lights/").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an existing, possibly shared, client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(TransportError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self.client.get(url).send().await?;
        let body = check_status(response)?.text().await?;

        tracing::trace!(body = %body, "Received HTTP response");

        Ok(body)
    }

    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<(), TransportError> {
        tracing::debug!(url = %url, body = %body, "Sending HTTP POST");

        let response = self.client.post(url).json(body).send().await?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.40");
        assert_eq!(config.host(), "192.168.1.40");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::new("192.168.1.40").with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn http_config_endpoint() {
        let endpoint = HttpConfig::new("192.168.1.40:8080").endpoint().unwrap();
        assert_eq!(
            endpoint.base_url(),
            "http://192.168.1.40:8080/api/iris-lights/"
        );
    }

    #[test]
    fn http_config_endpoint_rejects_empty_host() {
        let result = HttpConfig::new("").endpoint();
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn http_config_into_transport() {
        assert!(HttpConfig::new("192.168.1.40").into_transport().is_ok());
    }
}
