// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature units and conversion.
//!
//! The smart home platform always receives thermostat temperatures in
//! Celsius, so readings from Fahrenheit thermostats are converted before
//! they are reported. Converted values are rounded to one decimal place.

use std::fmt;

use serde::Serialize;

/// Temperature unit of a thermostat.
///
/// Serializes to the platform's `thermostatTemperatureUnit` values.
///
/// # Examples
///
/// ```
/// use ohga_lib::types::TemperatureUnit;
///
/// assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(50.0), 10.0);
/// assert_eq!(TemperatureUnit::Celsius.to_celsius(21.5), 21.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the single-letter unit code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Converts a reading in this unit to Celsius.
    ///
    /// Celsius readings pass through unchanged; Fahrenheit readings are
    /// converted and rounded to one decimal place.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Converts Fahrenheit to Celsius, rounded to one decimal place.
#[must_use]
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    round_one_decimal((value - 32.0) * 5.0 / 9.0)
}

/// Converts Celsius to Fahrenheit, rounded to one decimal place.
#[must_use]
pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    round_one_decimal(value * 9.0 / 5.0 + 32.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
