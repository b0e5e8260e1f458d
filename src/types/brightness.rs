// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness types for the host and device scales.

use std::fmt;

use crate::error::ValueError;

use super::scale::{ScaleRange, to_host_scale, to_native_scale};

/// The device's own brightness steps.
pub const NATIVE_BRIGHTNESS_SCALE: ScaleRange = ScaleRange::new(1.0, 10.0);

/// The host range the native steps are spread across.
///
/// The host contract is 1-255, but normal-on brightness never reports below
/// 5; the value 1 is reserved for night mode.
pub const HOST_BRIGHTNESS_SCALE: ScaleRange = ScaleRange::new(5.0, 255.0);

/// Host-facing brightness level (1-255).
///
/// A brightness of [`Brightness::MIN`] selects the light's night mode rather
/// than a dimmed normal mode.
///
/// # Examples
///
/// ```
/// use iris_light::types::Brightness;
///
/// let b = Brightness::new(128).unwrap();
/// assert_eq!(b.value(), 128);
/// assert!(Brightness::MIN.is_night());
///
/// // Zero is not a brightness, it is "off"
/// assert!(Brightness::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness, shown while the light is in night mode.
    pub const MIN: Self = Self(1);

    /// Maximum brightness.
    pub const MAX: Self = Self(255);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is 0.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value == 0 {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: 255,
                actual: 0,
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, raising 0 to the minimum.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value == 0 { Self::MIN } else { Self(value) }
    }

    /// Returns the brightness value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this is the level that requests night mode.
    #[must_use]
    pub const fn is_night(&self) -> bool {
        self.0 == Self::MIN.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Device-native brightness step (1-10).
///
/// # Examples
///
/// ```
/// use iris_light::types::{Brightness, NativeBrightness};
///
/// // Writes round up
/// let native = NativeBrightness::from_host(Brightness::new(128).unwrap());
/// assert_eq!(native.value(), 6);
///
/// // Reads round to nearest
/// assert_eq!(NativeBrightness::MAX.to_host().value(), 255);
/// assert_eq!(NativeBrightness::MIN.to_host().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeBrightness(u8);

impl NativeBrightness {
    /// Lowest device step.
    pub const MIN: Self = Self(1);

    /// Highest device step.
    pub const MAX: Self = Self(10);

    /// Creates a new native brightness step.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [1, 10].
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

    /// Creates a native step, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Converts a host brightness into the step to store on the device.
    ///
    /// The proportional value is rounded up so the device never lands below
    /// the requested level.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_host(brightness: Brightness) -> Self {
        let raw = to_native_scale(
            HOST_BRIGHTNESS_SCALE,
            NATIVE_BRIGHTNESS_SCALE,
            f64::from(brightness.value()),
        )
        .ceil();
        let bounded = raw.clamp(NATIVE_BRIGHTNESS_SCALE.low(), NATIVE_BRIGHTNESS_SCALE.high());
        Self(bounded as u8)
    }

    /// Converts this step into the host brightness it represents in normal
    /// mode, rounding to the nearest level.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_host(self) -> Brightness {
        let host = to_host_scale(
            NATIVE_BRIGHTNESS_SCALE,
            HOST_BRIGHTNESS_SCALE,
            f64::from(self.0),
        );
        // to_host_scale never exceeds 255 for this range
        Brightness::clamped(host.min(255) as u8)
    }

    /// Returns the step value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for NativeBrightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

impl TryFrom<u8> for NativeBrightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_rejects_zero() {
        assert!(Brightness::new(0).is_err());
        assert_eq!(Brightness::new(1).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::new(255).unwrap(), Brightness::MAX);
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(0), Brightness::MIN);
        assert_eq!(Brightness::clamped(42).value(), 42);
    }

    #[test]
    fn only_minimum_is_night() {
        assert!(Brightness::MIN.is_night());
        assert!(!Brightness::new(2).unwrap().is_night());
        assert!(!Brightness::MAX.is_night());
    }

    #[test]
    fn native_brightness_range() {
        assert!(NativeBrightness::new(0).is_err());
        assert!(NativeBrightness::new(11).is_err());
        for v in 1..=10 {
            assert_eq!(NativeBrightness::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn native_brightness_clamped() {
        assert_eq!(NativeBrightness::clamped(0), NativeBrightness::MIN);
        assert_eq!(NativeBrightness::clamped(99), NativeBrightness::MAX);
    }

    #[test]
    fn from_host_rounds_up() {
        assert_eq!(NativeBrightness::from_host(Brightness::new(128).unwrap()).value(), 6);
        assert_eq!(NativeBrightness::from_host(Brightness::MAX).value(), 10);
        assert_eq!(NativeBrightness::from_host(Brightness::new(5).unwrap()).value(), 1);
        // Just above the first step lands on the second
        assert_eq!(NativeBrightness::from_host(Brightness::new(6).unwrap()).value(), 2);
    }

    #[test]
    fn from_host_below_scale_stays_in_domain() {
        assert_eq!(NativeBrightness::from_host(Brightness::new(2).unwrap()).value(), 1);
    }

    #[test]
    fn to_host_endpoints() {
        assert_eq!(NativeBrightness::MAX.to_host().value(), 255);
        assert_eq!(NativeBrightness::MIN.to_host().value(), 5);
    }

    #[test]
    fn to_host_is_monotonic() {
        let mut previous = 0;
        for v in 1..=10 {
            let host = NativeBrightness::new(v).unwrap().to_host().value();
            assert!(host > previous);
            previous = host;
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(NativeBrightness::new(3).unwrap().to_string(), "3/10");
        assert_eq!(Brightness::new(77).unwrap().to_string(), "77");
    }
}
