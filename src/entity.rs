// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing light interface.
//!
//! A home-automation host drives a light through [`LightEntity`]: it reads
//! the presented properties when rendering and calls the command methods
//! when a user acts. The host never talks to the device directly.

use std::future::Future;

use crate::error::Result;
use crate::types::{Brightness, ColorMode, ColorTemp};

/// Optional settings for a turn-on command.
///
/// # Examples
///
/// ```
/// use iris_light::TurnOnOptions;
/// use iris_light::types::{Brightness, ColorTemp};
///
/// let options = TurnOnOptions::new()
///     .with_brightness(Brightness::new(128).unwrap())
///     .with_color_temp(ColorTemp::new(300).unwrap());
/// assert_eq!(options.brightness().map(|b| b.value()), Some(128));
/// assert!(!options.requests_night());
///
/// assert!(TurnOnOptions::new().with_brightness(Brightness::MIN).requests_night());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOnOptions {
    brightness: Option<Brightness>,
    color_temp: Option<ColorTemp>,
}

impl TurnOnOptions {
    /// Creates options that only turn the light on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            brightness: None,
            color_temp: None,
        }
    }

    /// Requests a brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Requests a color temperature.
    #[must_use]
    pub const fn with_color_temp(mut self, color_temp: ColorTemp) -> Self {
        self.color_temp = Some(color_temp);
        self
    }

    /// Returns the requested brightness.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the requested color temperature.
    #[must_use]
    pub const fn color_temp(&self) -> Option<ColorTemp> {
        self.color_temp
    }

    /// Returns `true` if the requested brightness selects night mode.
    #[must_use]
    pub fn requests_night(&self) -> bool {
        self.brightness.is_some_and(|b| b.is_night())
    }
}

/// A light as seen by the home-automation host.
///
/// Property getters are computed from cached state on every call. Command
/// methods talk to the device and surface transport failures.
pub trait LightEntity {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns `true` if the light is on (normal or night mode).
    fn is_on(&self) -> bool;

    /// Returns the brightness (1-255).
    fn brightness(&self) -> Brightness;

    /// Returns the color temperature in mireds (155-500).
    fn color_temp(&self) -> ColorTemp;

    /// Returns the color mode the light is currently in.
    fn color_mode(&self) -> ColorMode {
        ColorMode::ColorTemp
    }

    /// Returns every color mode the light supports.
    fn supported_color_modes(&self) -> &'static [ColorMode] {
        &[ColorMode::ColorTemp]
    }

    /// Turns the light on, optionally setting brightness and color
    /// temperature.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the resulting device requests fails.
    fn turn_on(&self, options: TurnOnOptions) -> impl Future<Output = Result<()>> + Send;

    /// Turns the light off.
    ///
    /// # Errors
    ///
    /// Returns an error if the device request fails.
    fn turn_off(&self) -> impl Future<Output = Result<()>> + Send;

    /// Fetches the latest state from the device; the host's periodic
    /// update hook.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be reached or its reply is
    /// malformed.
    fn update(&self) -> impl Future<Output = Result<()>> + Send;
}
