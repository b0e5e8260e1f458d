// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic state refresh.
//!
//! The light has no push channel, so the cache only converges with the
//! device when somebody fetches. [`Poller`] runs that fetch on a fixed
//! interval in a background task.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use iris_light::DeviceBridge;
//! use iris_light::poller::Poller;
//!
//! # async fn example() -> iris_light::Result<()> {
//! let bridge = Arc::new(DeviceBridge::http("192.168.1.40").build().await?);
//!
//! let handle = Poller::new(Duration::from_secs(30))?.spawn(Arc::clone(&bridge));
//!
//! // Polling stops when the handle is dropped
//! drop(handle);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::bridge::DeviceBridge;
use crate::error::{Error, Result};
use crate::protocol::Transport;

/// Schedules periodic refreshes of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    interval: Duration,
}

impl Poller {
    /// Default polling interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    /// Creates a poller with the given interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the interval is zero.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::InvalidConfiguration(
                "polling interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self { interval })
    }

    /// Returns the polling interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling `bridge` in a background task.
    ///
    /// The first refresh happens one interval from now; setup is expected to
    /// have refreshed already. Failed refreshes are logged and polling
    /// continues. Must be called from within a tokio runtime.
    #[must_use = "polling stops when the handle is dropped"]
    pub fn spawn<T>(&self, bridge: Arc<DeviceBridge<T>>) -> PollHandle
    where
        T: Transport + 'static,
    {
        let period = self.interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(e) = bridge.refresh().await {
                    tracing::warn!(
                        host = %bridge.endpoint(),
                        error = %e,
                        "Scheduled light refresh failed"
                    );
                }
            }
        });
        PollHandle { task }
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}

/// Handle to a running poll task.
///
/// Dropping the handle stops polling.
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stops polling.
    pub fn stop(self) {
        drop(self);
    }

    /// Returns `true` if the poll task is no longer running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::endpoint::DeviceEndpoint;
    use crate::test_support::RecordingTransport;
    use crate::types::PowerState;

    fn bridge() -> (Arc<DeviceBridge<RecordingTransport>>, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let endpoint = DeviceEndpoint::new("iris.local").unwrap();
        let bridge = Arc::new(DeviceBridge::new(endpoint, Arc::clone(&transport)));
        (bridge, transport)
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(matches!(
            Poller::new(Duration::ZERO),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn default_interval() {
        assert_eq!(Poller::default().interval(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn polls_once_per_interval() {
        let (bridge, transport) = bridge();
        let _handle = Poller::new(Duration::from_secs(10)).unwrap().spawn(bridge);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(transport.get_count(), 0);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(transport.get_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_picks_up_device_changes() {
        let (bridge, transport) = bridge();
        let _handle = Poller::new(Duration::from_secs(10))
            .unwrap()
            .spawn(Arc::clone(&bridge));

        transport.set_state_body(r#"{"brightness": 2, "color_temp": 3, "state": 0}"#);
        tokio::time::sleep(Duration::from_secs(15)).await;

        assert_eq!(bridge.state().power(), PowerState::Off);
        assert!(!bridge.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_polling_after_failures() {
        let (bridge, transport) = bridge();
        transport.set_unreachable(true);
        let handle = Poller::new(Duration::from_secs(10)).unwrap().spawn(bridge);

        tokio::time::sleep(Duration::from_secs(35)).await;

        assert_eq!(transport.get_count(), 3);
        assert!(!handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_polling() {
        let (bridge, transport) = bridge();
        let handle = Poller::new(Duration::from_secs(10)).unwrap().spawn(bridge);

        tokio::time::sleep(Duration::from_secs(15)).await;
        handle.stop();
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert_eq!(transport.get_count(), 1);
    }
}
