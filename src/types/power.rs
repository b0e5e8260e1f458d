// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and color mode types.

use std::fmt;

/// The light's reported power state.
///
/// The device encodes this as an integer: 0 is off, 1 is night mode and 2 is
/// normal on. Any state other than [`PowerState::Off`] counts as on.
///
/// # Examples
///
/// ```
/// use iris_light::types::PowerState;
///
/// assert_eq!(PowerState::from_num(1), Some(PowerState::Night));
/// assert!(PowerState::Night.is_on());
/// assert!(!PowerState::Off.is_on());
/// assert_eq!(PowerState::from_num(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PowerState {
    /// The light is off.
    Off,
    /// Night mode: a fixed minimum-brightness preset.
    Night,
    /// Normal on.
    #[default]
    On,
}

impl PowerState {
    /// Returns the numeric value used by the device.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Night => 1,
            Self::On => 2,
        }
    }

    /// Parses the numeric value used by the device.
    #[must_use]
    pub const fn from_num(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Night),
            2 => Some(Self::On),
            _ => None,
        }
    }

    /// Returns `true` unless the light is off.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Returns the lowercase name of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Night => "night",
            Self::On => "on",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The color modes a light can be driven in.
///
/// Iris lights only support tunable white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Tunable white, set in mireds.
    ColorTemp,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorTemp => f.write_str("color_temp"),
        }
    }
}
