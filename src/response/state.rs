// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State document parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::state::DeviceState;
use crate::types::{NativeBrightness, NativeColorTemp, PowerState};

/// The state document returned by `GET /api/iris-lights/`.
///
/// All three fields are required integers. Extra fields are ignored.
///
/// # Examples
///
/// ```
/// use iris_light::response::StateResponse;
/// use iris_light::types::PowerState;
///
/// let response = StateResponse::parse(r#"{"brightness": 10, "color_temp": 1, "state": 2}"#).unwrap();
/// let state = response.into_state().unwrap();
/// assert_eq!(state.brightness().value(), 10);
/// assert_eq!(state.power(), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StateResponse {
    /// Native brightness step.
    pub brightness: i64,
    /// Native color temperature step.
    pub color_temp: i64,
    /// Power state: 0 off, 1 night, 2 on.
    pub state: i64,
}

impl StateResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON or a field is
    /// missing or not an integer.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Validates every field and converts the document into a state record.
    ///
    /// Nothing is produced unless all fields are within their native
    /// domains.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::OutOfRange` naming the first offending field.
    pub fn into_state(self) -> Result<DeviceState, ParseError> {
        let brightness = u8::try_from(self.brightness)
            .ok()
            .and_then(|v| NativeBrightness::new(v).ok())
            .ok_or(ParseError::OutOfRange {
                field: "brightness",
                value: self.brightness,
                min: i64::from(NativeBrightness::MIN.value()),
                max: i64::from(NativeBrightness::MAX.value()),
            })?;

        let color_temp = u8::try_from(self.color_temp)
            .ok()
            .and_then(|v| NativeColorTemp::new(v).ok())
            .ok_or(ParseError::OutOfRange {
                field: "color_temp",
                value: self.color_temp,
                min: i64::from(NativeColorTemp::MIN.value()),
                max: i64::from(NativeColorTemp::MAX.value()),
            })?;

        let power = PowerState::from_num(self.state).ok_or(ParseError::OutOfRange {
            field: "state",
            value: self.state,
            min: i64::from(PowerState::Off.as_num()),
            max: i64::from(PowerState::On.as_num()),
        })?;

        Ok(DeviceState::new(brightness, color_temp, power))
    }
}
