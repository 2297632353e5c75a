// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off reading of switch-like item states.

/// The on/off reading of a switch-like item state.
///
/// openHAB reports `"ON"` and `"OFF"` for switch items, but also `"NULL"`
/// or `"UNDEF"` when the state is not known yet. Only the exact string
/// `"ON"` counts as on.
///
/// # Examples
///
/// ```
/// use ohga_lib::types::OnOff;
///
/// assert!(OnOff::from_state("ON").is_on());
/// assert!(!OnOff::from_state("OFF").is_on());
/// assert!(!OnOff::from_state("NULL").is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnOff {
    /// The item is off, or its state is unknown.
    #[default]
    Off,
    /// The item is on.
    On,
}

impl OnOff {
    /// Reads an item state string.
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        if state == "ON" { Self::On } else { Self::Off }
    }

    /// Returns whether this reading is on.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the reading as a percentage, 100 when on and 0 when off.
    #[must_use]
    pub const fn as_percent(self) -> f64 {
        if self.is_on() { 100.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_on_is_on() {
        assert_eq!(OnOff::from_state("ON"), OnOff::On);
        assert_eq!(OnOff::from_state("OFF"), OnOff::Off);
        assert_eq!(OnOff::from_state("on"), OnOff::Off);
        assert_eq!(OnOff::from_state("UNDEF"), OnOff::Off);
        assert_eq!(OnOff::from_state(""), OnOff::Off);
    }

    #[test]
    fn percent_reading() {
        assert!((OnOff::On.as_percent() - 100.0).abs() < f64::EPSILON);
        assert!(OnOff::Off.as_percent().abs() < f64::EPSILON);
    }
}
