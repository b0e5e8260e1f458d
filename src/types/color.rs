// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature types for the host and device scales.
//!
//! Unlike brightness, color temperature rounds up in both directions.

use std::fmt;

use crate::error::ValueError;

use super::scale::{ScaleRange, to_native_scale};

/// The device's own color temperature steps.
pub const NATIVE_COLOR_TEMP_SCALE: ScaleRange = ScaleRange::new(1.0, 11.0);

/// The host color temperature range in mireds.
pub const HOST_COLOR_TEMP_SCALE: ScaleRange = ScaleRange::new(155.0, 500.0);

/// Color temperature in mireds (155-500).
///
/// Lower values are cooler (bluer), higher values are warmer.
///
/// # Examples
///
/// ```
/// use iris_light::types::ColorTemp;
///
/// let ct = ColorTemp::new(300).unwrap();
/// assert_eq!(ct.value(), 300);
/// assert!(ColorTemp::new(600).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorTemp(u16);

impl ColorTemp {
    /// Minimum color temperature (coolest).
    pub const MIN: u16 = 155;

    /// Maximum color temperature (warmest).
    pub const MAX: u16 = 500;

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [155, 500].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a color temperature, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the color temperature value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_kelvin(&self) -> u16 {
        (1_000_000 / u32::from(self.0)) as u16
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mireds", self.0)
    }
}

impl TryFrom<u16> for ColorTemp {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Device-native color temperature step (1-11).
///
/// # Examples
///
/// ```
/// use iris_light::types::{ColorTemp, NativeColorTemp};
///
/// let native = NativeColorTemp::from_host(ColorTemp::new(300).unwrap());
/// assert_eq!(native.value(), 6);
/// assert_eq!(native.to_host().value(), 328);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeColorTemp(u8);

impl NativeColorTemp {
    /// Lowest device step (coolest).
    pub const MIN: Self = Self(1);

    /// Middle device step.
    pub const MID: Self = Self(6);

    /// Highest device step (warmest).
    pub const MAX: Self = Self(11);

    /// Creates a new native color temperature step.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1, 11].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN.0),
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Converts a host color temperature into the step to store on the
    /// device, rounding up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_host(color_temp: ColorTemp) -> Self {
        let raw = to_native_scale(
            HOST_COLOR_TEMP_SCALE,
            NATIVE_COLOR_TEMP_SCALE,
            f64::from(color_temp.value()),
        )
        .ceil();
        let bounded = raw.clamp(NATIVE_COLOR_TEMP_SCALE.low(), NATIVE_COLOR_TEMP_SCALE.high());
        Self(bounded as u8)
    }

    /// Converts this step into mireds, rounding up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_host(self) -> ColorTemp {
        let mireds = NATIVE_COLOR_TEMP_SCALE
            .scale_to(HOST_COLOR_TEMP_SCALE, f64::from(self.0))
            .ceil();
        ColorTemp::clamped(mireds as u16)
    }

    /// Returns the step value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for NativeColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

impl TryFrom<u8> for NativeColorTemp {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temp_valid() {
        for v in 155..=500 {
            assert_eq!(ColorTemp::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn color_temp_invalid() {
        assert!(ColorTemp::new(154).is_err());
        assert!(ColorTemp::new(501).is_err());
    }

    #[test]
    fn color_temp_clamped() {
        assert_eq!(ColorTemp::clamped(100).value(), 155);
        assert_eq!(ColorTemp::clamped(600).value(), 500);
        assert_eq!(ColorTemp::clamped(300).value(), 300);
    }

    #[test]
    fn color_temp_kelvin() {
        assert_eq!(ColorTemp::new(500).unwrap().to_kelvin(), 2000);
        assert_eq!(ColorTemp::new(250).unwrap().to_kelvin(), 4000);
    }

    #[test]
    fn native_color_temp_range() {
        assert!(NativeColorTemp::new(0).is_err());
        assert!(NativeColorTemp::new(12).is_err());
        assert_eq!(NativeColorTemp::new(11).unwrap(), NativeColorTemp::MAX);
    }

    #[test]
    fn from_host_rounds_up() {
        assert_eq!(NativeColorTemp::from_host(ColorTemp::new(155).unwrap()).value(), 1);
        assert_eq!(NativeColorTemp::from_host(ColorTemp::new(156).unwrap()).value(), 2);
        assert_eq!(NativeColorTemp::from_host(ColorTemp::new(300).unwrap()).value(), 6);
        assert_eq!(NativeColorTemp::from_host(ColorTemp::new(500).unwrap()).value(), 11);
    }

    #[test]
    fn to_host_rounds_up() {
        assert_eq!(NativeColorTemp::MIN.to_host().value(), 155);
        // 155 + 34.5 = 189.5
        assert_eq!(NativeColorTemp::new(2).unwrap().to_host().value(), 190);
        assert_eq!(NativeColorTemp::MAX.to_host().value(), 500);
    }

    #[test]
    fn to_host_is_monotonic_and_bounded() {
        let mut previous = 0;
        for v in 1..=11 {
            let mireds = NativeColorTemp::new(v).unwrap().to_host().value();
            assert!((155..=500).contains(&mireds));
            assert!(mireds >= previous);
            previous = mireds;
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(ColorTemp::new(300).unwrap().to_string(), "300 mireds");
        assert_eq!(NativeColorTemp::new(6).unwrap().to_string(), "6/11");
    }
}
