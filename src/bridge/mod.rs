// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bridge between a host and one Iris light.
//!
//! [`DeviceBridge`] owns the cached [`DeviceState`], turns host commands into
//! device requests and reconciles its cache with what the device reports.
//!
//! # Consistency model
//!
//! - Brightness and color temperature writes update the cache immediately
//!   (optimistically), before the request is sent. Nothing is rolled back
//!   when a request fails.
//! - `turn_off` leaves the cache alone; the next refresh reports the new
//!   power state.
//! - Commands never trigger a refresh. The cache converges on the next
//!   [`refresh`](DeviceBridge::refresh), usually driven by a
//!   [`Poller`](crate::poller::Poller).
//! - A refresh replaces the whole record at once, and only after the
//!   response has been fully validated.
//!
//! # Examples
//!
//! ```no_run
//! use iris_light::{DeviceBridge, TurnOnOptions};
//! use iris_light::types::{Brightness, ColorTemp};
//!
//! # async fn example() -> iris_light::Result<()> {
//! let bridge = DeviceBridge::http("192.168.1.40").build().await?;
//!
//! bridge
//!     .turn_on(
//!         TurnOnOptions::new()
//!             .with_brightness(Brightness::new(128)?)
//!             .with_color_temp(ColorTemp::new(300)?),
//!     )
//!     .await?;
//!
//! println!("{} is on: {}", bridge.name(), bridge.is_on());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpBridgeBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::{BrightnessCommand, ColorTempCommand, Command, PowerCommand};
use crate::endpoint::DeviceEndpoint;
use crate::entity::{LightEntity, TurnOnOptions};
use crate::error::{Error, Result};
use crate::protocol::Transport;
use crate::response::StateResponse;
use crate::state::DeviceState;
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{Brightness, ColorTemp, NativeBrightness, NativeColorTemp};

/// A bridge to a single Iris light.
///
/// # Type Parameter
///
/// `T` is the transport used to reach the device. The transport is shared
/// through an `Arc`; its owner decides connection pooling and timeouts.
///
/// # Thread Safety
///
/// The cached state sits behind a read-write lock. Each property read takes
/// one snapshot, and a refresh swaps the whole record under one write lock,
/// so readers never see fields from two different fetches.
#[derive(Debug)]
pub struct DeviceBridge<T: Transport> {
    endpoint: DeviceEndpoint,
    transport: Arc<T>,
    state: RwLock<DeviceState>,
    callbacks: CallbackRegistry,
}

impl<T: Transport> DeviceBridge<T> {
    /// Creates a bridge with placeholder state.
    ///
    /// The placeholder is not authoritative; call
    /// [`refresh`](Self::refresh) before presenting the light.
    #[must_use]
    pub fn new(endpoint: DeviceEndpoint, transport: Arc<T>) -> Self {
        Self {
            endpoint,
            transport,
            state: RwLock::new(DeviceState::placeholder()),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Returns the device endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &DeviceEndpoint {
        &self.endpoint
    }

    /// Returns the display name, which is the host address.
    #[must_use]
    pub fn name(&self) -> &str {
        self.endpoint.host()
    }

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        *self.state.read()
    }

    // ========== Presented properties ==========

    /// Returns `true` unless the cached power state is off.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.read().is_on()
    }

    /// Returns the host brightness (1-255) computed from the cached state.
    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.state.read().host_brightness()
    }

    /// Returns the color temperature in mireds computed from the cached
    /// state.
    #[must_use]
    pub fn color_temp(&self) -> ColorTemp {
        self.state.read().host_color_temp()
    }

    // ========== Commands ==========

    /// Sends a single command to the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnreachable`] if the request fails.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<()> {
        let url = self.endpoint.command_url(command);
        let body = command.body();

        tracing::debug!(url = %url, value = ?command.value(), "Sending light command");

        self.transport
            .post(&url, &body)
            .await
            .map_err(Error::DeviceUnreachable)
    }

    /// Turns the light on.
    ///
    /// A requested brightness of [`Brightness::MIN`] switches the light to
    /// night mode and nothing else is sent. Otherwise the light is switched
    /// on, then the requested brightness and color temperature are stored
    /// in the cache and sent, in that order.
    ///
    /// Every step is attempted even if an earlier one fails. Failures are
    /// logged and the last one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnreachable`] if any request fails.
    pub async fn turn_on(&self, options: TurnOnOptions) -> Result<()> {
        tracing::debug!(?options, host = %self.endpoint, "Turning light on");

        if options.requests_night() {
            return self.send_command(&PowerCommand::Night).await;
        }

        let mut outcome = self.send_step(&PowerCommand::On).await;

        if let Some(brightness) = options.brightness() {
            let native = NativeBrightness::from_host(brightness);
            self.state.write().set_brightness(native);
            keep_last_error(
                &mut outcome,
                self.send_step(&BrightnessCommand::new(native)).await,
            );
        }

        if let Some(color_temp) = options.color_temp() {
            let native = NativeColorTemp::from_host(color_temp);
            self.state.write().set_color_temp(native);
            keep_last_error(
                &mut outcome,
                self.send_step(&ColorTempCommand::new(native)).await,
            );
        }

        outcome
    }

    /// Turns the light off.
    ///
    /// The cached power state is not touched; the next refresh picks up the
    /// change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnreachable`] if the request fails.
    pub async fn turn_off(&self) -> Result<()> {
        tracing::debug!(host = %self.endpoint, "Turning light off");
        self.send_command(&PowerCommand::Off).await
    }

    /// Fetches the device state and replaces the cache with it.
    ///
    /// Subscribers are notified once the new state is in place. On failure
    /// the cache is left exactly as it was and nobody is notified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnreachable`] if the request fails and
    /// [`Error::MalformedDeviceResponse`] if the body is not a valid state
    /// document.
    pub async fn refresh(&self) -> Result<DeviceState> {
        tracing::debug!(url = %self.endpoint.base_url(), "Fetching light state");

        let body = self.transport.get(self.endpoint.base_url()).await?;
        let state = StateResponse::parse(&body)?.into_state()?;

        *self.state.write() = state;

        tracing::debug!(host = %self.endpoint, state = %state, "Light state refreshed");

        self.callbacks.dispatch_state_changed(&state);
        Ok(state)
    }

    async fn send_step<C: Command + Sync>(&self, command: &C) -> Result<()> {
        let result = self.send_command(command).await;
        if let Err(e) = &result {
            tracing::warn!(
                host = %self.endpoint,
                command = command.path(),
                error = %e,
                "Light command failed"
            );
        }
        result
    }
}

fn keep_last_error(outcome: &mut Result<()>, step: Result<()>) {
    if step.is_err() {
        *outcome = step;
    }
}

impl<T: Transport> Subscribable for DeviceBridge<T> {
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceState) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl<T: Transport> LightEntity for DeviceBridge<T> {
    fn name(&self) -> &str {
        DeviceBridge::name(self)
    }

    fn is_on(&self) -> bool {
        DeviceBridge::is_on(self)
    }

    fn brightness(&self) -> Brightness {
        DeviceBridge::brightness(self)
    }

    fn color_temp(&self) -> ColorTemp {
        DeviceBridge::color_temp(self)
    }

    async fn turn_on(&self, options: TurnOnOptions) -> Result<()> {
        DeviceBridge::turn_on(self, options).await
    }

    async fn turn_off(&self) -> Result<()> {
        DeviceBridge::turn_off(self).await
    }

    async fn update(&self) -> Result<()> {
        self.refresh().await.map(|_| ())
    }
}
