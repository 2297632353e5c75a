// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSB color reading of color item states.

use std::str::FromStr;

use crate::error::ParseError;

/// HSB color as reported by an openHAB color item (`"hue,saturation,brightness"`).
///
/// Hue is in degrees, saturation and brightness are percentages. Values are
/// read as-is without range checks.
///
/// # Examples
///
/// ```
/// use ohga_lib::types::HsbState;
///
/// let color: HsbState = "120, 100, 50".parse().unwrap();
/// assert_eq!(color.hue(), 120.0);
/// assert_eq!(color.saturation(), 100.0);
/// assert_eq!(color.brightness(), 50.0);
///
/// assert!("red".parse::<HsbState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbState {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl HsbState {
    /// Creates an HSB color from its components.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation percentage.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn brightness(&self) -> f64 {
        self.brightness
    }
}

impl FromStr for HsbState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor(s.to_string());

        let parts: Vec<f64> = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        let &[hue, saturation, brightness] = parts.as_slice() else {
            return Err(invalid());
        };
        if !parts.iter().all(|part| part.is_finite()) {
            return Err(invalid());
        }

        Ok(Self::new(hue, saturation, brightness))
    }
}
