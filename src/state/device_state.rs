// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use std::fmt;

use crate::types::{Brightness, ColorTemp, NativeBrightness, NativeColorTemp, PowerState};

/// Cached state of an Iris light, in device-native units.
///
/// Every field is always inside its native domain; the types enforce it.
/// Host-scale values are computed on each call and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceState {
    brightness: NativeBrightness,
    color_temp: NativeColorTemp,
    power: PowerState,
}

impl DeviceState {
    /// Brightness assumed before the first fetch.
    pub const DEFAULT_BRIGHTNESS: NativeBrightness = NativeBrightness::MAX;

    /// Color temperature step assumed before the first fetch.
    pub const DEFAULT_COLOR_TEMP: NativeColorTemp = NativeColorTemp::MID;

    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(
        brightness: NativeBrightness,
        color_temp: NativeColorTemp,
        power: PowerState,
    ) -> Self {
        Self {
            brightness,
            color_temp,
            power,
        }
    }

    /// Returns the placeholder state used until the first fetch: full
    /// brightness, mid color temperature, on.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(
            Self::DEFAULT_BRIGHTNESS,
            Self::DEFAULT_COLOR_TEMP,
            PowerState::On,
        )
    }

    /// Returns the native brightness step.
    #[must_use]
    pub const fn brightness(&self) -> NativeBrightness {
        self.brightness
    }

    /// Sets the native brightness step.
    pub fn set_brightness(&mut self, brightness: NativeBrightness) {
        self.brightness = brightness;
    }

    /// Returns the native color temperature step.
    #[must_use]
    pub const fn color_temp(&self) -> NativeColorTemp {
        self.color_temp
    }

    /// Sets the native color temperature step.
    pub fn set_color_temp(&mut self, color_temp: NativeColorTemp) {
        self.color_temp = color_temp;
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    // ========== Host view ==========

    /// Returns `true` unless the light is off.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the brightness on the host scale.
    ///
    /// Night mode always reads as [`Brightness::MIN`], whatever step the
    /// device reports. Otherwise the native step is mapped and rounded to
    /// the nearest level.
    #[must_use]
    pub fn host_brightness(&self) -> Brightness {
        match self.power {
            PowerState::Night => Brightness::MIN,
            PowerState::Off | PowerState::On => self.brightness.to_host(),
        }
    }

    /// Returns the color temperature in mireds, rounded up.
    #[must_use]
    pub fn host_color_temp(&self) -> ColorTemp {
        self.color_temp.to_host()
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (brightness {}, color temp {})",
            self.power, self.brightness, self.color_temp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(brightness: u8, color_temp: u8, power: PowerState) -> DeviceState {
        DeviceState::new(
            NativeBrightness::new(brightness).unwrap(),
            NativeColorTemp::new(color_temp).unwrap(),
            power,
        )
    }

    #[test]
    fn placeholder_values() {
        let state = DeviceState::default();
        assert_eq!(state.brightness().value(), 10);
        assert_eq!(state.color_temp().value(), 6);
        assert_eq!(state.power(), PowerState::On);
    }

    #[test]
    fn placeholders_are_independent() {
        let mut first = DeviceState::default();
        let second = DeviceState::default();
        first.set_brightness(NativeBrightness::MIN);
        assert_eq!(second.brightness(), NativeBrightness::MAX);
    }

    #[test]
    fn is_on_for_any_nonzero_state() {
        assert!(!state(5, 5, PowerState::Off).is_on());
        assert!(state(5, 5, PowerState::Night).is_on());
        assert!(state(5, 5, PowerState::On).is_on());
    }

    #[test]
    fn night_mode_reads_as_minimum() {
        for brightness in 1..=10 {
            assert_eq!(
                state(brightness, 6, PowerState::Night).host_brightness(),
                Brightness::MIN
            );
        }
    }

    #[test]
    fn normal_brightness_scenarios() {
        assert_eq!(state(10, 6, PowerState::On).host_brightness().value(), 255);
        // No night bypass outside night mode
        assert_eq!(state(1, 6, PowerState::On).host_brightness().value(), 5);
    }

    #[test]
    fn host_color_temp_is_monotonic() {
        let mut previous = 0;
        for color_temp in 1..=11 {
            let mireds = state(5, color_temp, PowerState::On).host_color_temp().value();
            assert!((155..=500).contains(&mireds));
            assert!(mireds >= previous);
            previous = mireds;
        }
    }

    #[test]
    fn setters() {
        let mut state = DeviceState::default();
        state.set_brightness(NativeBrightness::MIN);
        state.set_color_temp(NativeColorTemp::MAX);
        assert_eq!(state.brightness(), NativeBrightness::MIN);
        assert_eq!(state.color_temp(), NativeColorTemp::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(
            state(3, 6, PowerState::Night).to_string(),
            "night (brightness 3/10, color temp 6/11)"
        );
    }
}
