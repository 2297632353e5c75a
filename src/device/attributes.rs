// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static device attributes.

use serde::Serialize;

use super::DeviceKind;
use super::state::uses_fahrenheit;
use crate::config::DeviceConfig;
use crate::item::Item;
use crate::types::{FanSpeed, TemperatureUnit};

/// Thermostat modes every thermostat advertises.
pub const THERMOSTAT_MODES: &str = "off,heat,cool,on,heatcool,auto,eco";

/// Color model advertised by color lights.
pub const COLOR_MODEL_HSV: &str = "hsv";

/// Static attributes of a device.
///
/// Field names follow the platform's attribute schema. Only the fields a
/// device kind uses are set; unset fields are omitted when serialized.
///
/// # Examples
///
/// ```
/// use ohga_lib::device::DeviceKind;
/// use ohga_lib::{Item, ItemType};
///
/// let item = Item::new(ItemType::Group).with_tags(["Thermostat", "Fahrenheit"]);
/// let attributes = DeviceKind::Thermostat.attributes(&item);
///
/// assert_eq!(
///     serde_json::to_value(&attributes).unwrap(),
///     serde_json::json!({
///         "availableThermostatModes": "off,heat,cool,on,heatcool,auto,eco",
///         "thermostatTemperatureUnit": "F"
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    /// Color model of a color light.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_model: Option<&'static str>,

    /// Whether a fan accepts speed percentages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_fan_speed_percent: Option<bool>,

    /// Named fan speeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_fan_speeds: Option<AvailableFanSpeeds>,

    /// Whether a fan can reverse its direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversible: Option<bool>,

    /// Comma-separated thermostat modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_thermostat_modes: Option<&'static str>,

    /// Unit the thermostat displays temperatures in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_temperature_unit: Option<TemperatureUnit>,
}

/// Named fan speeds advertised by a fan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableFanSpeeds {
    /// The speeds, in configuration order.
    pub speeds: Vec<FanSpeedAttribute>,
    /// Whether the speeds are ordered from slowest to fastest.
    pub ordered: bool,
}

/// One named fan speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanSpeedAttribute {
    /// Speed name, reported back as the current speed setting.
    pub speed_name: String,
    /// Synonyms per language.
    pub speed_values: Vec<SpeedValues>,
}

/// Synonyms of a fan speed in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeedValues {
    /// Phrases selecting the speed.
    pub speed_synonym: Vec<String>,
    /// Language of the phrases.
    pub lang: String,
}

impl FanSpeedAttribute {
    fn new(speed: &FanSpeed, lang: &str) -> Self {
        Self {
            speed_name: speed.name().to_string(),
            speed_values: vec![SpeedValues {
                speed_synonym: speed.synonyms().to_vec(),
                lang: lang.to_string(),
            }],
        }
    }
}

impl DeviceAttributes {
    /// Computes the attributes of an item resolved as `kind`.
    ///
    /// Only the item's type, tags and configuration are read, never its
    /// state.
    #[must_use]
    pub fn of(kind: DeviceKind, item: &Item) -> Self {
        match kind {
            DeviceKind::ColorLight => Self {
                color_model: Some(COLOR_MODEL_HSV),
                ..Self::default()
            },
            DeviceKind::Fan => Self::fan(&DeviceConfig::from_item(item)),
            DeviceKind::Thermostat => Self::thermostat(item),
            DeviceKind::SimpleLight
            | DeviceKind::DimmableLight
            | DeviceKind::Valve
            | DeviceKind::Sprinkler
            | DeviceKind::Lock
            | DeviceKind::SecuritySystem
            | DeviceKind::Blinds
            | DeviceKind::Switch => Self::default(),
        }
    }

    fn fan(config: &DeviceConfig) -> Self {
        let Some(speeds) = config.fan_speeds() else {
            return Self {
                supports_fan_speed_percent: Some(true),
                ..Self::default()
            };
        };

        let lang = config.lang();
        Self {
            available_fan_speeds: Some(AvailableFanSpeeds {
                speeds: speeds
                    .iter()
                    .map(|speed| FanSpeedAttribute::new(speed, lang))
                    .collect(),
                ordered: config.ordered,
            }),
            reversible: Some(false),
            ..Self::default()
        }
    }

    fn thermostat(item: &Item) -> Self {
        let unit = if uses_fahrenheit(item) {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        };

        Self {
            available_thermostat_modes: Some(THERMOSTAT_MODES),
            thermostat_temperature_unit: Some(unit),
            ..Self::default()
        }
    }

    /// Returns whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;
    use serde_json::json;

    fn fan(config: &[(&str, serde_json::Value)]) -> Item {
        config
            .iter()
            .fold(Item::new(ItemType::Dimmer).with_tags(["Fan"]), |item, (k, v)| {
                item.with_config(*k, v.clone())
            })
    }

    #[test]
    fn fan_without_speeds_supports_percent() {
        let attributes = DeviceKind::Fan.attributes(&fan(&[]));
        assert_eq!(
            serde_json::to_value(&attributes).unwrap(),
            json!({ "supportsFanSpeedPercent": true })
        );
    }

    #[test]
    fn fan_with_speeds_lists_them() {
        let item = fan(&[
            ("speeds", json!("0=null:off, 50=slow, 100=full:fast")),
            ("ordered", json!(true)),
        ]);

        assert_eq!(
            serde_json::to_value(DeviceKind::Fan.attributes(&item)).unwrap(),
            json!({
                "availableFanSpeeds": {
                    "speeds": [
                        {
                            "speed_name": "0",
                            "speed_values": [{ "speed_synonym": ["null", "off"], "lang": "en" }]
                        },
                        {
                            "speed_name": "50",
                            "speed_values": [{ "speed_synonym": ["slow"], "lang": "en" }]
                        },
                        {
                            "speed_name": "100",
                            "speed_values": [{ "speed_synonym": ["full", "fast"], "lang": "en" }]
                        }
                    ],
                    "ordered": true
                },
                "reversible": false
            })
        );
    }

    #[test]
    fn fan_speeds_use_configured_lang_and_default_unordered() {
        let item = fan(&[("speeds", json!("1=langsam")), ("lang", json!("de"))]);
        let speeds = DeviceKind::Fan
            .attributes(&item)
            .available_fan_speeds
            .unwrap();

        assert!(!speeds.ordered);
        assert_eq!(speeds.speeds[0].speed_values[0].lang, "de");
    }

    #[test]
    fn fan_speeds_skip_malformed_entries() {
        let item = fan(&[("speeds", json!("a=1:2, b="))]);
        let speeds = DeviceKind::Fan
            .attributes(&item)
            .available_fan_speeds
            .unwrap();

        assert_eq!(speeds.speeds.len(), 1);
        assert_eq!(speeds.speeds[0].speed_name, "a");
        assert_eq!(speeds.speeds[0].speed_values[0].speed_synonym, ["1", "2"]);
    }

    #[test]
    fn thermostat_unit_follows_tag_or_config() {
        let celsius = Item::new(ItemType::Group).with_tags(["Thermostat"]);
        let tagged = Item::new(ItemType::Group).with_tags(["Thermostat", "Fahrenheit"]);
        let configured = Item::new(ItemType::Group)
            .with_tags(["Thermostat"])
            .with_config("useFahrenheit", true);

        let unit = |item: &Item| {
            DeviceKind::Thermostat
                .attributes(item)
                .thermostat_temperature_unit
        };
        assert_eq!(unit(&celsius), Some(TemperatureUnit::Celsius));
        assert_eq!(unit(&tagged), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(unit(&configured), Some(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn switch_family_has_no_attributes() {
        let item = Item::new(ItemType::Switch).with_state("ON");
        for kind in [
            DeviceKind::Switch,
            DeviceKind::Valve,
            DeviceKind::Sprinkler,
            DeviceKind::Lock,
            DeviceKind::SecuritySystem,
            DeviceKind::SimpleLight,
        ] {
            let attributes = kind.attributes(&item);
            assert!(attributes.is_empty(), "{} has attributes", kind.name());
            assert_eq!(serde_json::to_value(&attributes).unwrap(), json!({}));
        }
    }

    #[test]
    fn attributes_ignore_state() {
        let item = fan(&[]);
        assert_eq!(
            DeviceKind::Fan.attributes(&item.clone().with_state("10")),
            DeviceKind::Fan.attributes(&item.with_state("NULL"))
        );
    }
}
