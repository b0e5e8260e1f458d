// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear conversion between the device-native and host-facing scales.
//!
//! The light speaks in a handful of coarse steps (1-10 brightness, 1-11
//! color temperature) while the host works in fine-grained units (1-255
//! brightness, 155-500 mireds). Both sides are ordered ranges, and a value
//! is moved between them by mapping the endpoints onto each other.
//!
//! Rounding is deliberately asymmetric and is applied by the callers, not
//! here:
//!
//! | Quantity | Host to native (write) | Native to host (read) |
//! |----------|------------------------|-----------------------|
//! | Brightness | ceiling | nearest, clamped |
//! | Color temperature | ceiling | ceiling |

use std::fmt;

/// An ordered numeric domain described by its two endpoints.
///
/// Both endpoints are inclusive and `low` must be strictly below `high`;
/// zero-width ranges are not supported.
///
/// # Examples
///
/// ```
/// use iris_light::types::ScaleRange;
///
/// let range = ScaleRange::new(1.0, 10.0);
/// assert!((range.span() - 9.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    low: f64,
    high: f64,
}

impl ScaleRange {
    /// Creates a range from its endpoints.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Maps `value` from this range proportionally onto `target`.
    ///
    /// No rounding or clamping is applied; values outside this range map to
    /// values outside `target`.
    #[must_use]
    pub fn scale_to(&self, target: Self, value: f64) -> f64 {
        (value - self.low) * target.span() / self.span() + target.low
    }
}

impl fmt::Display for ScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Maps a native value into the host scale, rounding to the nearest integer.
///
/// The result is clamped to `[max(1, host.low), host.high]` and is never
/// below 1. Out-of-range input is clamped rather than rejected.
///
/// # Examples
///
/// ```
/// use iris_light::types::{to_host_scale, ScaleRange};
///
/// let native = ScaleRange::new(1.0, 10.0);
/// let host = ScaleRange::new(5.0, 255.0);
/// assert_eq!(to_host_scale(native, host, 10.0), 255);
/// assert_eq!(to_host_scale(native, host, 1.0), 5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_host_scale(native: ScaleRange, host: ScaleRange, value: f64) -> u16 {
    let floor = host.low.max(1.0);
    let scaled = native.scale_to(host, value).round();
    // Saturating cast: the clamp keeps the value within [1, host.high].
    scaled.min(host.high).max(floor) as u16
}

/// Maps a host value into the native scale without rounding or clamping.
///
/// Callers round the result up before storing it as a device setting.
///
/// # Examples
///
/// ```
/// use iris_light::types::{to_native_scale, ScaleRange};
///
/// let host = ScaleRange::new(5.0, 255.0);
/// let native = ScaleRange::new(1.0, 10.0);
/// let raw = to_native_scale(host, native, 128.0);
/// assert_eq!(raw.ceil(), 6.0);
/// ```
#[must_use]
pub fn to_native_scale(host: ScaleRange, native: ScaleRange, value: f64) -> f64 {
    host.scale_to(native, value)
}
