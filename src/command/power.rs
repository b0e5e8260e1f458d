// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power commands.

use std::fmt;

use crate::command::Command;

/// Command to switch the light's power mode.
///
/// # Examples
///
/// ```
/// use iris_light::command::{Command, PowerCommand};
///
/// assert_eq!(PowerCommand::Night.path(), "night");
/// assert_eq!(PowerCommand::Night.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerCommand {
    /// Turn the light on in normal mode.
    On,
    /// Turn the light off.
    Off,
    /// Switch to night mode, the device's fixed minimum preset.
    Night,
}

impl Command for PowerCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Night => "night",
        }
    }

    fn value(&self) -> Option<u8> {
        None
    }
}

impl fmt::Display for PowerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
