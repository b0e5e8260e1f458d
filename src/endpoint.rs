// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device address handling.

use std::fmt;

use crate::command::Command;
use crate::error::Error;

/// Path below the device root that serves the light API.
const API_PATH: &str = "/api/iris-lights/";

/// The address of a single Iris light.
///
/// Holds the host as given (also used as the display name) and the base URL
/// derived from it. Immutable once created.
///
/// # Examples
///
/// ```
/// use iris_light::DeviceEndpoint;
///
/// let endpoint = DeviceEndpoint::new("192.168.1.40").unwrap();
/// assert_eq!(endpoint.base_url(), "http://192.168.1.40/api/iris-lights/");
///
/// // Ports are kept as part of the host
/// let endpoint = DeviceEndpoint::new("iris.local:8080").unwrap();
/// assert_eq!(endpoint.base_url(), "http://iris.local:8080/api/iris-lights/");
///
/// assert!(DeviceEndpoint::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceEndpoint {
    host: String,
    base_url: String,
}

impl DeviceEndpoint {
    /// Creates an endpoint for the given host address.
    ///
    /// Accepts a hostname or IP address with an optional `:port` suffix.
    /// Bracketed IPv6 literals (`[fe80::1]:80`) are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the address is empty,
    /// contains a scheme, path or whitespace, or has an invalid port.
    pub fn new(host: impl Into<String>) -> Result<Self, Error> {
        let host = host.into();
        validate_host(&host)?;
        let base_url = format!("http://{host}{API_PATH}");
        Ok(Self { host, base_url })
    }

    /// Returns the host address as configured.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the base URL, which is also the state endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL a command is posted to.
    #[must_use]
    pub fn command_url<C: Command + ?Sized>(&self, command: &C) -> String {
        format!("{}{}", self.base_url, command.path())
    }
}

impl fmt::Display for DeviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

fn validate_host(host: &str) -> Result<(), Error> {
    let invalid = |reason: &str| -> Result<(), Error> {
        Err(Error::InvalidConfiguration(format!("{reason}: {host:?}")))
    };

    if host.is_empty() {
        return invalid("device address is empty");
    }
    if host.contains("://") {
        return invalid("device address must not include a scheme");
    }
    if host
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
    {
        return invalid("device address contains invalid characters");
    }

    let (name, port) = if let Some(rest) = host.strip_prefix('[') {
        let Some((literal, tail)) = rest.split_once(']') else {
            return invalid("unterminated IPv6 literal");
        };
        if literal.is_empty() {
            return invalid("empty IPv6 literal");
        }
        match tail {
            "" => (literal, None),
            _ => match tail.strip_prefix(':') {
                Some(port) => (literal, Some(port)),
                None => return invalid("unexpected characters after IPv6 literal"),
            },
        }
    } else {
        match host.rsplit_once(':') {
            Some((name, port)) if !name.contains(':') => (name, Some(port)),
            Some(_) => return invalid("IPv6 addresses must be bracketed"),
            None => (host, None),
        }
    };

    if name.is_empty() {
        return invalid("device address has no host name");
    }
    if let Some(port) = port
        && !matches!(port.parse::<u16>(), Ok(p) if p != 0)
    {
        return invalid("invalid port");
    }
    Ok(())
}
