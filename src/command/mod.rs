// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Iris light command definitions.
//!
//! Every command is an HTTP POST to a path below the device's base URL with
//! a JSON body of the form `{"value": <int or null>}`. The response body is
//! ignored.
//!
//! # Available Commands
//!
//! | Command Type | Path | Value |
//! |-------------|------|-------|
//! | [`PowerCommand::On`] | `on` | `null` |
//! | [`PowerCommand::Off`] | `off` | `null` |
//! | [`PowerCommand::Night`] | `night` | `null` |
//! | [`BrightnessCommand`] | `bright` | native brightness (1-10) |
//! | [`ColorTempCommand`] | `color-temp` | native color temperature (1-11) |
//!
//! # Examples
//!
//! ```
//! use iris_light::command::{BrightnessCommand, Command, PowerCommand};
//! use iris_light::types::NativeBrightness;
//!
//! let on = PowerCommand::On;
//! assert_eq!(on.path(), "on");
//! assert_eq!(on.body(), serde_json::json!({"value": null}));
//!
//! let bright = BrightnessCommand::new(NativeBrightness::MAX);
//! assert_eq!(bright.path(), "bright");
//! assert_eq!(bright.body(), serde_json::json!({"value": 10}));
//! ```

mod light;
mod power;

pub use light::{BrightnessCommand, ColorTempCommand};
pub use power::PowerCommand;

/// A command that can be sent to an Iris light.
pub trait Command {
    /// Returns the path suffix, relative to the device base URL.
    fn path(&self) -> &'static str;

    /// Returns the command value, if any.
    fn value(&self) -> Option<u8>;

    /// Returns the JSON request body.
    ///
    /// Commands without a value still send the key, set to `null`.
    fn body(&self) -> serde_json::Value {
        serde_json::json!({ "value": self.value() })
    }
}
