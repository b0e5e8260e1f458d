// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached light state.
//!
//! [`DeviceState`] is the bridge's copy of what the light last reported.
//! It is replaced as a whole on every successful fetch and never merged
//! field by field.
//!
//! # Examples
//!
//! ```
//! use iris_light::state::DeviceState;
//! use iris_light::types::{NativeBrightness, NativeColorTemp, PowerState};
//!
//! let state = DeviceState::new(NativeBrightness::MAX, NativeColorTemp::MIN, PowerState::On);
//! assert!(state.is_on());
//! assert_eq!(state.host_brightness().value(), 255);
//! assert_eq!(state.host_color_temp().value(), 155);
//! ```

mod device_state;

pub use device_state::DeviceState;
