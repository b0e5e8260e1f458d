// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::protocol::Transport;

/// Records every request and answers GETs with a configurable body.
#[derive(Debug)]
pub(crate) struct RecordingTransport {
    posts: Mutex<Vec<(String, serde_json::Value)>>,
    gets: AtomicUsize,
    state_body: Mutex<String>,
    failing_paths: Mutex<Vec<&'static str>>,
    unreachable: AtomicBool,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::with_state_body(r#"{"brightness": 10, "color_temp": 6, "state": 2}"#)
    }

    pub(crate) fn with_state_body(body: &str) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            gets: AtomicUsize::new(0),
            state_body: Mutex::new(body.to_string()),
            failing_paths: Mutex::new(Vec::new()),
            unreachable: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_state_body(&self, body: &str) {
        *self.state_body.lock() = body.to_string();
    }

    /// Makes POSTs to the given command path fail.
    pub(crate) fn fail_path(&self, path: &'static str) {
        self.failing_paths.lock().push(path);
    }

    /// Makes every GET fail.
    pub(crate) fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub(crate) fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Returns the command path and value of every POST, in order.
    pub(crate) fn posted(&self) -> Vec<(String, serde_json::Value)> {
        self.posts
            .lock()
            .iter()
            .map(|(url, body)| {
                let path = url.rsplit('/').next().unwrap_or_default().to_string();
                (path, body["value"].clone())
            })
            .collect()
    }

    pub(crate) fn posted_paths(&self) -> Vec<String> {
        self.posted().into_iter().map(|(path, _)| path).collect()
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, _url: &str) -> Result<String, TransportError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(TransportError::ConnectionFailed(
                "connection refused".to_string(),
            ));
        }
        Ok(self.state_body.lock().clone())
    }

    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<(), TransportError> {
        self.posts.lock().push((url.to_string(), body.clone()));
        let failing = self
            .failing_paths
            .lock()
            .iter()
            .any(|path| url.ends_with(&format!("/{path}")));
        if failing {
            return Err(TransportError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}
