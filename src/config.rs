// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration read from item metadata.
//!
//! Device-specific settings live in the item's `ga` metadata namespace.
//! openHAB stores them as a free-form JSON object, so every value is read
//! leniently: a missing key or a value of the wrong JSON type falls back to
//! the default.

use serde_json::{Map, Value};

use crate::item::Item;
use crate::types::FanSpeed;

/// Language used for fan speed synonyms when none is configured.
pub const DEFAULT_LANG: &str = "en";

/// Device configuration of a single item.
///
/// # Examples
///
/// ```
/// use ohga_lib::{DeviceConfig, Item, ItemType};
///
/// let item = Item::new(ItemType::Dimmer)
///     .with_config("speeds", "low=Low:Slow,high=High")
///     .with_config("ordered", true);
///
/// let config = DeviceConfig::from_item(&item);
/// assert!(config.ordered);
/// assert_eq!(config.lang(), "en");
/// assert_eq!(config.fan_speeds().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Raw fan speed definition string.
    pub speeds: Option<String>,
    /// Whether the fan speeds are ordered from slowest to fastest.
    pub ordered: bool,
    /// Language of the fan speed synonyms.
    pub lang: Option<String>,
    /// Whether a rollershutter reports its open percentage directly.
    pub inverted: bool,
    /// Whether a thermostat reports in Fahrenheit.
    pub use_fahrenheit: bool,
}

impl DeviceConfig {
    /// Extracts the configuration attached to an item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        item.device_config().map(Self::from_map).unwrap_or_default()
    }

    /// Extracts the configuration from a raw configuration object.
    #[must_use]
    pub fn from_map(config: &Map<String, Value>) -> Self {
        let string = |key: &str| {
            config
                .get(key)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let flag = |key: &str| config.get(key).and_then(Value::as_bool).unwrap_or(false);

        Self {
            speeds: string("speeds"),
            ordered: flag("ordered"),
            lang: string("lang"),
            inverted: flag("inverted"),
            use_fahrenheit: flag("useFahrenheit"),
        }
    }

    /// Returns the configured synonym language, defaulting to English.
    #[must_use]
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    /// Returns the parsed fan speeds, or `None` without a speed definition.
    ///
    /// A definition whose every entry is malformed yields an empty list.
    #[must_use]
    pub fn fan_speeds(&self) -> Option<Vec<FanSpeed>> {
        self.speeds.as_deref().map(FanSpeed::parse_list)
    }
}
