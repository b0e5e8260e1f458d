// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for state change notifications.
//!
//! The light never pushes anything; the bridge learns about changes by
//! fetching. After every successful fetch it tells the host that the
//! presented state may have changed so the host can re-render.
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Registry that stores callbacks and dispatches notifications
//! - [`Subscribable`] - Trait for types that support subscriptions
//!
//! # Usage
//!
//! ```no_run
//! use iris_light::DeviceBridge;
//! use iris_light::subscription::Subscribable;
//!
//! # async fn example() -> iris_light::Result<()> {
//! let bridge = DeviceBridge::http("192.168.1.40").build().await?;
//!
//! let sub_id = bridge.on_state_changed(|state| {
//!     println!("Light is now {state}");
//! });
//!
//! bridge.refresh().await?;
//! bridge.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
