// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Iris light bridge.
//!
//! The top-level [`Error`] separates the three ways talking to a light can
//! fail: the device could not be reached, it answered with something the
//! bridge cannot use, or the bridge was configured with an unusable address.
//! Host-supplied values outside their domain are reported as
//! [`ValueError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: connection refused, timeout, DNS failure or
    /// a non-success HTTP status.
    #[error("device unreachable: {0}")]
    DeviceUnreachable(#[from] TransportError),

    /// The device answered, but the body is missing or mistyped expected
    /// fields, or reports a value outside its native domain.
    #[error("malformed device response: {0}")]
    MalformedDeviceResponse(#[from] ParseError),

    /// The device address is empty or unparseable, or the HTTP client could
    /// not be created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A host-facing value is outside its allowed range.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors raised by a [`Transport`](crate::protocol::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors related to parsing the device state body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed, or a required field is missing or mistyped.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A reported value lies outside its native domain.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The offending field.
        field: &'static str,
        /// The reported value.
        value: i64,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 1,
            max: 255,
            actual: 0,
        };
        assert_eq!(err.to_string(), "value 0 is out of range [1, 255]");
    }

    #[test]
    fn error_from_transport_error() {
        let err: Error = TransportError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, Error::DeviceUnreachable(_)));
        assert_eq!(
            err.to_string(),
            "device unreachable: connection failed: refused"
        );
    }

    #[test]
    fn error_from_parse_error() {
        let err: Error = ParseError::OutOfRange {
            field: "state",
            value: 3,
            min: 0,
            max: 2,
        }
        .into();
        assert!(matches!(err, Error::MalformedDeviceResponse(_)));
        assert_eq!(
            err.to_string(),
            "malformed device response: state value 3 is out of range [0, 2]"
        );
    }

    #[test]
    fn status_error_display() {
        let err = TransportError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 - Service Unavailable");
    }
}
