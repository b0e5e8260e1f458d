// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Iris light control.
//!
//! Every quantity exists twice: once on the host scale the home-automation
//! platform works in, and once on the coarse native scale the device stores.
//! The conversions between the two live on the native types.
//!
//! # Types
//!
//! - [`ScaleRange`] - An ordered numeric domain, plus [`to_host_scale`] and
//!   [`to_native_scale`] to move values between domains
//! - [`Brightness`] / [`NativeBrightness`] - 1-255 on the host, 1-10 on the device
//! - [`ColorTemp`] / [`NativeColorTemp`] - 155-500 mireds on the host, 1-11 on the device
//! - [`PowerState`] - Off, night mode or on
//! - [`ColorMode`] - Supported color modes

mod brightness;
mod color;
mod power;
mod scale;

pub use brightness::{
    Brightness, HOST_BRIGHTNESS_SCALE, NATIVE_BRIGHTNESS_SCALE, NativeBrightness,
};
pub use color::{ColorTemp, HOST_COLOR_TEMP_SCALE, NATIVE_COLOR_TEMP_SCALE, NativeColorTemp};
pub use power::{ColorMode, PowerState};
pub use scale::{ScaleRange, to_host_scale, to_native_scale};
