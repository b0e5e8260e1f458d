// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light level commands.
//!
//! Both commands carry a value already converted to the device's native
//! scale.

use crate::command::Command;
use crate::types::{NativeBrightness, NativeColorTemp};

/// Command to set the native brightness step.
///
/// # Examples
///
/// ```
/// use iris_light::command::{BrightnessCommand, Command};
/// use iris_light::types::NativeBrightness;
///
/// let cmd = BrightnessCommand::new(NativeBrightness::new(6).unwrap());
/// assert_eq!(cmd.path(), "bright");
/// assert_eq!(cmd.value(), Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrightnessCommand(NativeBrightness);

impl BrightnessCommand {
    /// Creates a command setting the given step.
    #[must_use]
    pub const fn new(value: NativeBrightness) -> Self {
        Self(value)
    }

    /// Returns the step being set.
    #[must_use]
    pub const fn brightness(&self) -> NativeBrightness {
        self.0
    }
}

impl Command for BrightnessCommand {
    fn path(&self) -> &'static str {
        "bright"
    }

    fn value(&self) -> Option<u8> {
        Some(self.0.value())
    }
}

/// Command to set the native color temperature step.
///
/// # Examples
///
/// ```
/// use iris_light::command::{ColorTempCommand, Command};
/// use iris_light::types::NativeColorTemp;
///
/// let cmd = ColorTempCommand::new(NativeColorTemp::MAX);
/// assert_eq!(cmd.path(), "color-temp");
/// assert_eq!(cmd.value(), Some(11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTempCommand(NativeColorTemp);

impl ColorTempCommand {
    /// Creates a command setting the given step.
    #[must_use]
    pub const fn new(value: NativeColorTemp) -> Self {
        Self(value)
    }

    /// Returns the step being set.
    #[must_use]
    pub const fn color_temp(&self) -> NativeColorTemp {
        self.0
    }
}

impl Command for ColorTempCommand {
    fn path(&self) -> &'static str {
        "color-temp"
    }

    fn value(&self) -> Option<u8> {
        Some(self.0.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_command() {
        let cmd = BrightnessCommand::new(NativeBrightness::MIN);
        assert_eq!(cmd.path(), "bright");
        assert_eq!(cmd.value(), Some(1));
        assert_eq!(cmd.brightness(), NativeBrightness::MIN);
    }

    #[test]
    fn color_temp_command() {
        let cmd = ColorTempCommand::new(NativeColorTemp::new(6).unwrap());
        assert_eq!(cmd.path(), "color-temp");
        assert_eq!(cmd.value(), Some(6));
    }
}
