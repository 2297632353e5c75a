// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric reading of string-encoded item states.

use crate::error::ParseError;

/// Parses a string-encoded numeric state.
///
/// Surrounding whitespace is ignored, and so is a unit suffix separated by a
/// space, as reported by dimensioned items (`"21.5 °C"`). Empty, non-numeric
/// and non-finite states are rejected.
///
/// # Arguments
///
/// * `field` - The state field being projected, used in the error
/// * `state` - The raw item state
///
/// # Errors
///
/// Returns `ParseError::InvalidNumber` if the state is not a finite number.
///
/// # Examples
///
/// ```
/// use ohga_lib::types::parse_number;
///
/// assert_eq!(parse_number("brightness", "42").unwrap(), 42.0);
/// assert_eq!(parse_number("ambient", "21.5 °C").unwrap(), 21.5);
/// assert!(parse_number("brightness", "NULL").is_err());
/// ```
pub fn parse_number(field: &'static str, state: &str) -> Result<f64, ParseError> {
    let trimmed = state.trim();
    let numeric = trimmed.split_once(' ').map_or(trimmed, |(value, _unit)| value);

    numeric
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            value: state.to_string(),
        })
}
