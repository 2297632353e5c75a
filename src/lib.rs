// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ohga` Lib - A Rust library to expose openHAB items as smart home devices.
//!
//! This library takes openHAB items, as returned by the openHAB REST API, and
//! decides which smart home device each one is. It then computes the
//! device's static attributes and its current state in the platform's
//! schema.
//!
//! # Supported Devices
//!
//! - **Switches**: plain switches, valves, sprinklers, locks, security systems
//! - **Lights**: on/off, dimmable and color lights
//! - **Blinds**: rollershutters
//! - **Fans**: dimmers, with percentage or named speeds
//! - **Thermostats**: groups of temperature, mode and humidity items
//!
//! The library is read-only: it performs no I/O and does not execute
//! commands.
//!
//! # Quick Start
//!
//! ```
//! use ohga_lib::{Item, ResolvedDevice};
//!
//! # fn main() -> ohga_lib::Result<()> {
//! let json = r#"{
//!     "type": "Group",
//!     "name": "Thermostat",
//!     "tags": ["Thermostat", "Fahrenheit"],
//!     "members": [
//!         { "type": "Number", "state": "68", "tags": ["CurrentTemperature"] },
//!         { "type": "String", "state": "heat", "tags": ["HeatingCoolingMode"] }
//!     ]
//! }"#;
//! let item: Item = serde_json::from_str(json).expect("valid item document");
//!
//! let Some(device) = ResolvedDevice::resolve(&item) else {
//!     return Ok(()); // not exposed
//! };
//!
//! let state = device.state()?;
//! assert_eq!(state.thermostat_temperature_ambient, Some(20.0));
//! assert_eq!(state.thermostat_mode.as_deref(), Some("heat"));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Device-specific settings are read from the item's `ga` metadata, see
//! [`DeviceConfig`].

mod config;
pub mod device;
pub mod error;
mod item;
pub mod types;

pub use config::{DEFAULT_LANG, DeviceConfig};
pub use device::{
    DeviceAttributes, DeviceDescription, DeviceKind, DeviceState, DeviceType, ResolvedDevice,
    Trait, resolve,
};
pub use error::{Error, ParseError, Result};
pub use item::{METADATA_NAMESPACE, Item, ItemMetadata, ItemType};
