// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP bridge builder.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::bridge::DeviceBridge;
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};

impl DeviceBridge<HttpTransport> {
    /// Starts building a bridge to the light at `host`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpBridgeBuilder {
        HttpBridgeBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a bridge from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpBridgeBuilder {
        HttpBridgeBuilder::new(config)
    }
}

/// Builder for HTTP bridges.
///
/// Created with `DeviceBridge::http("host")` or
/// `DeviceBridge::http_config(HttpConfig::new("host"))`.
///
/// # Examples
///
/// ```no_run
/// use iris_light::DeviceBridge;
/// use std::time::Duration;
///
/// # async fn example() -> iris_light::Result<()> {
/// // Own client with a custom timeout; fetches the initial state
/// let bridge = DeviceBridge::http("192.168.1.40")
///     .with_timeout(Duration::from_secs(3))
///     .build()
///     .await?;
///
/// // Share the host's client between several lights
/// let client = reqwest::Client::new();
/// let kitchen = DeviceBridge::http("192.168.1.41")
///     .with_client(client.clone())
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpBridgeBuilder {
    config: HttpConfig,
    client: Option<Client>,
}

impl HttpBridgeBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Sets the request timeout used when the builder creates its own
    /// client. Ignored when a client is supplied.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses an existing client instead of creating one.
    ///
    /// The client's own timeout and pooling settings apply.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the bridge and fetches the device state.
    ///
    /// The bridge is only returned once it holds real device state.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The address is invalid or the client cannot be created
    /// - The device cannot be reached
    /// - The device's state document is malformed
    pub async fn build(self) -> Result<DeviceBridge<HttpTransport>, Error> {
        let bridge = self.build_without_refresh()?;
        bridge.refresh().await?;
        Ok(bridge)
    }

    /// Builds the bridge without contacting the device.
    ///
    /// The bridge starts with placeholder state until its first refresh.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the address is invalid or
    /// the client cannot be created.
    pub fn build_without_refresh(self) -> Result<DeviceBridge<HttpTransport>, Error> {
        let endpoint = self.config.endpoint()?;
        let transport = match self.client {
            Some(client) => HttpTransport::from_client(client),
            None => self.config.into_transport()?,
        };
        Ok(DeviceBridge::new(endpoint, Arc::new(transport)))
    }
}
