// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Iris Light - A Rust library that bridges Iris lights into a
//! home-automation host.
//!
//! An Iris light exposes a small HTTP API under `/api/iris-lights/`. It
//! reports brightness on a 1-10 scale, color temperature on a 1-11 scale and
//! a three-way power state (off, night, on). Hosts work in 1-255 brightness
//! and mireds. This crate keeps a cached copy of the device state, converts
//! between the two worlds and sends commands.
//!
//! # Supported Features
//!
//! - **Power control**: on, off and night mode
//! - **Light control**: brightness and color temperature with scale
//!   conversion
//! - **State sync**: on-demand refresh, periodic polling and change callbacks
//!
//! # Quick Start
//!
//! ```no_run
//! use iris_light::{DeviceBridge, TurnOnOptions};
//! use iris_light::types::Brightness;
//!
//! #[tokio::main]
//! async fn main() -> iris_light::Result<()> {
//!     // Fetches the initial state before returning
//!     let bridge = DeviceBridge::http("192.168.1.40").build().await?;
//!
//!     bridge
//!         .turn_on(TurnOnOptions::new().with_brightness(Brightness::new(200)?))
//!         .await?;
//!
//!     println!("brightness: {}", bridge.brightness().value());
//!     Ok(())
//! }
//! ```
//!
//! ## Polling and Callbacks
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use iris_light::{DeviceBridge, Poller, Subscribable};
//!
//! #[tokio::main]
//! async fn main() -> iris_light::Result<()> {
//!     let bridge = Arc::new(DeviceBridge::http("192.168.1.40").build().await?);
//!
//!     bridge.on_state_changed(|state| {
//!         println!("light is now {state}");
//!     });
//!
//!     let _polling = Poller::new(Duration::from_secs(30))?.spawn(Arc::clone(&bridge));
//!     tokio::time::sleep(Duration::from_secs(120)).await;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod command;
pub mod endpoint;
pub mod entity;
pub mod error;
pub mod poller;
pub mod protocol;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;

#[cfg(test)]
mod test_support;

pub use bridge::DeviceBridge;
#[cfg(feature = "http")]
pub use bridge::HttpBridgeBuilder;
pub use command::{BrightnessCommand, ColorTempCommand, Command, PowerCommand};
pub use endpoint::DeviceEndpoint;
pub use entity::{LightEntity, TurnOnOptions};
pub use error::{Error, ParseError, Result, TransportError, ValueError};
pub use poller::{PollHandle, Poller};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::Transport;
pub use state::DeviceState;
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{Brightness, ColorMode, ColorTemp, NativeBrightness, NativeColorTemp, PowerState};
