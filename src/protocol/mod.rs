// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for talking to Iris lights.
//!
//! The bridge only needs two primitives: fetch a URL and post a JSON body to
//! a URL. The [`Transport`] trait captures exactly that, so the HTTP session
//! (connection pooling, timeouts) stays owned by whoever constructs it and
//! can be shared between bridges.
//!
//! # Transports
//!
//! - [`HttpTransport`]: `reqwest`-based transport (feature `http`)

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use std::future::Future;

use crate::error::TransportError;

/// Trait for transports that can reach an Iris light.
///
/// Implementations must not retry on their own; the bridge reports every
/// failure to its caller as-is.
pub trait Transport: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request cannot be completed or the
    /// device answers with a non-success status.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send;

    /// Posts `body` as JSON to `url`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request cannot be completed or the
    /// device answers with a non-success status.
    fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}
