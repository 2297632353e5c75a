// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types read from openHAB item states and configuration.
//!
//! openHAB reports every state as a string. The types in this module give
//! those strings a typed reading before they are projected onto device
//! state.
//!
//! # Types
//!
//! - [`OnOff`] - On/off reading of switch-like items
//! - [`HsbState`] - Hue/saturation/brightness reading of color items
//! - [`FanSpeed`] - Named fan speed from the `speeds` configuration
//! - [`TemperatureUnit`] - Celsius or Fahrenheit, with conversion
//! - [`parse_number`] - Numeric reading of a state string

mod color;
mod number;
mod power;
mod speed;
mod temperature;

pub use color::HsbState;
pub use number::parse_number;
pub use power::OnOff;
pub use speed::FanSpeed;
pub use temperature::{TemperatureUnit, celsius_to_fahrenheit, fahrenheit_to_celsius};
