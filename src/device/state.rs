// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current device state.

use serde::Serialize;

use super::DeviceKind;
use crate::config::DeviceConfig;
use crate::error::Result;
use crate::item::Item;
use crate::types::{HsbState, OnOff, TemperatureUnit, parse_number};

/// Tag marking a thermostat group that reports in Fahrenheit.
pub const FAHRENHEIT_TAG: &str = "Fahrenheit";

/// Member tags a thermostat group is searched for.
pub mod thermostat_tags {
    /// Member holding the ambient temperature.
    pub const CURRENT_TEMPERATURE: &str = "CurrentTemperature";
    /// Member holding the temperature setpoint.
    pub const TARGET_TEMPERATURE: &str = "TargetTemperature";
    /// Member holding the heating/cooling mode.
    pub const HEATING_COOLING_MODE: &str = "HeatingCoolingMode";
    /// Member holding the ambient humidity.
    pub const CURRENT_HUMIDITY: &str = "CurrentHumidity";
}

/// Current state of a device.
///
/// Field names follow the platform's state schema. Only the fields a device
/// kind reports are set; unset fields are omitted when serialized, so a
/// state with nothing to report serializes to `{}`.
///
/// # Examples
///
/// ```
/// use ohga_lib::device::DeviceKind;
/// use ohga_lib::{Item, ItemType};
///
/// let item = Item::new(ItemType::Switch).with_tags(["Sprinkler"]).with_state("ON");
/// let state = DeviceKind::Sprinkler.state(&item).unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&state).unwrap(),
///     serde_json::json!({ "isRunning": true, "isPaused": false })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    /// Whether the device is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,

    /// Brightness percentage of a light.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,

    /// Color of a color light.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorState>,

    /// Open percentage of a valve or blind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_percent: Option<f64>,

    /// Whether a sprinkler is running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_running: Option<bool>,

    /// Whether a sprinkler is paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,

    /// Whether a lock is locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    /// Whether a security system is armed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_armed: Option<bool>,

    /// Fan speed percentage, rounded to an integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_fan_speed_percent: Option<i64>,

    /// Name of the current fan speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_fan_speed_setting: Option<String>,

    /// Ambient temperature in Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_temperature_ambient: Option<f64>,

    /// Temperature setpoint in Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_temperature_setpoint: Option<f64>,

    /// Thermostat mode, as reported by the mode member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_mode: Option<String>,

    /// Ambient humidity percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_humidity_ambient: Option<f64>,
}

/// Color of a color light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorState {
    /// Color in the HSV model.
    #[serde(rename = "spectrumHSV")]
    pub spectrum_hsv: SpectrumHsv,
}

/// HSV color with saturation and value as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumHsv {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation, from 0 to 1.
    pub saturation: f64,
    /// Value, from 0 to 1.
    pub value: f64,
}

impl From<HsbState> for SpectrumHsv {
    fn from(color: HsbState) -> Self {
        Self {
            hue: color.hue(),
            saturation: color.saturation() / 100.0,
            value: color.brightness() / 100.0,
        }
    }
}

impl DeviceState {
    /// Computes the state of an item resolved as `kind`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidNumber` if a state read as a number is not
    /// numeric, and `ParseError::InvalidColor` if a color light's state is not
    /// an HSB triple.
    pub fn of(kind: DeviceKind, item: &Item) -> Result<Self> {
        let on_off = || OnOff::from_state(&item.state);

        let state = match kind {
            DeviceKind::Switch | DeviceKind::SimpleLight => Self {
                on: Some(on_off().is_on()),
                ..Self::default()
            },
            DeviceKind::Valve => Self {
                open_percent: Some(on_off().as_percent()),
                ..Self::default()
            },
            DeviceKind::Sprinkler => Self {
                is_running: Some(on_off().is_on()),
                is_paused: Some(false),
                ..Self::default()
            },
            DeviceKind::Lock => Self {
                is_locked: Some(on_off().is_on()),
                ..Self::default()
            },
            DeviceKind::SecuritySystem => Self {
                is_armed: Some(on_off().is_on()),
                ..Self::default()
            },
            DeviceKind::DimmableLight => {
                let brightness = parse_number("brightness", &item.state)?;
                Self {
                    on: Some(brightness > 0.0),
                    brightness: Some(brightness),
                    ..Self::default()
                }
            }
            DeviceKind::ColorLight => {
                let color: HsbState = item.state.parse()?;
                Self {
                    on: Some(color.brightness() > 0.0),
                    brightness: Some(color.brightness()),
                    color: Some(ColorState {
                        spectrum_hsv: color.into(),
                    }),
                    ..Self::default()
                }
            }
            DeviceKind::Blinds => Self::blinds(item)?,
            DeviceKind::Fan => Self::fan(item)?,
            DeviceKind::Thermostat => Self::thermostat(item)?,
        };

        Ok(state)
    }

    fn blinds(item: &Item) -> Result<Self> {
        let position = parse_number("openPercent", &item.state)?;
        let open_percent = if DeviceConfig::from_item(item).inverted {
            position
        } else {
            100.0 - position
        };

        Ok(Self {
            open_percent: Some(open_percent),
            ..Self::default()
        })
    }

    fn fan(item: &Item) -> Result<Self> {
        // Named speeds report the state verbatim; a speed name reads as off
        if DeviceConfig::from_item(item).speeds.is_some() {
            let on = parse_number("currentFanSpeedSetting", &item.state).is_ok_and(|n| n > 0.0);
            return Ok(Self {
                on: Some(on),
                current_fan_speed_setting: Some(item.state.clone()),
                ..Self::default()
            });
        }

        let speed = parse_number("currentFanSpeedPercent", &item.state)?;
        // Clamped to 0-100, so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let percent = speed.clamp(0.0, 100.0).round() as i64;

        Ok(Self {
            on: Some(speed > 0.0),
            current_fan_speed_percent: Some(percent),
            ..Self::default()
        })
    }

    fn thermostat(item: &Item) -> Result<Self> {
        let unit = if uses_fahrenheit(item) {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        };

        let member_state = |tag: &str| {
            let member = item.member_with_tag(tag);
            if member.is_none() {
                tracing::debug!(item = %item.name, tag, "Thermostat member not found");
            }
            member.map(|member| member.state.as_str())
        };
        let temperature = |field: &'static str, tag: &str| {
            member_state(tag)
                .map(|state| parse_number(field, state).map(|value| unit.to_celsius(value)))
                .transpose()
        };

        Ok(Self {
            thermostat_temperature_ambient: temperature(
                "thermostatTemperatureAmbient",
                thermostat_tags::CURRENT_TEMPERATURE,
            )?,
            thermostat_temperature_setpoint: temperature(
                "thermostatTemperatureSetpoint",
                thermostat_tags::TARGET_TEMPERATURE,
            )?,
            thermostat_mode: member_state(thermostat_tags::HEATING_COOLING_MODE)
                .map(String::from),
            thermostat_humidity_ambient: member_state(thermostat_tags::CURRENT_HUMIDITY)
                .map(|state| parse_number("thermostatHumidityAmbient", state))
                .transpose()?,
            ..Self::default()
        })
    }

    /// Returns whether no state field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Returns whether a thermostat item reports in Fahrenheit.
pub(super) fn uses_fahrenheit(item: &Item) -> bool {
    item.has_tag(FAHRENHEIT_TAG) || DeviceConfig::from_item(item).use_fahrenheit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseError};
    use crate::item::ItemType;
    use serde_json::json;

    fn member(tag: &str, state: &str) -> Item {
        Item::new(ItemType::Number).with_tags([tag]).with_state(state)
    }

    fn thermostat(tags: &[&str]) -> Item {
        Item::new(ItemType::Group).with_tags(tags.iter().copied())
    }

    #[test]
    fn switch_family_fields() {
        let on = Item::new(ItemType::Switch).with_state("ON");
        let off = Item::new(ItemType::Switch).with_state("OFF");

        assert_eq!(DeviceKind::Switch.state(&on).unwrap().on, Some(true));
        assert_eq!(DeviceKind::Switch.state(&off).unwrap().on, Some(false));
        assert_eq!(
            serde_json::to_value(DeviceKind::Valve.state(&off).unwrap()).unwrap(),
            json!({ "openPercent": 0.0 })
        );
        assert_eq!(
            serde_json::to_value(DeviceKind::Lock.state(&on).unwrap()).unwrap(),
            json!({ "isLocked": true })
        );
        assert_eq!(
            serde_json::to_value(DeviceKind::SecuritySystem.state(&off).unwrap()).unwrap(),
            json!({ "isArmed": false })
        );
    }

    #[test]
    fn sprinkler_is_never_paused() {
        let off = Item::new(ItemType::Switch).with_state("OFF");
        let state = DeviceKind::Sprinkler.state(&off).unwrap();
        assert_eq!(state.is_running, Some(false));
        assert_eq!(state.is_paused, Some(false));
    }

    #[test]
    fn unknown_switch_state_reads_as_off() {
        let item = Item::new(ItemType::Switch).with_state("NULL");
        assert_eq!(DeviceKind::SimpleLight.state(&item).unwrap().on, Some(false));
    }

    #[test]
    fn dimmable_light_brightness() {
        let item = Item::new(ItemType::Dimmer).with_state("30.5");
        let state = DeviceKind::DimmableLight.state(&item).unwrap();
        assert_eq!(state.on, Some(true));
        assert_eq!(state.brightness, Some(30.5));

        let item = Item::new(ItemType::Dimmer).with_state("0");
        let state = DeviceKind::DimmableLight.state(&item).unwrap();
        assert_eq!(state.on, Some(false));
        assert_eq!(state.brightness, Some(0.0));
    }

    #[test]
    fn color_light_spectrum() {
        let item = Item::new(ItemType::Color).with_state("200,50,40");
        assert_eq!(
            serde_json::to_value(DeviceKind::ColorLight.state(&item).unwrap()).unwrap(),
            json!({
                "on": true,
                "brightness": 40.0,
                "color": { "spectrumHSV": { "hue": 200.0, "saturation": 0.5, "value": 0.4 } }
            })
        );
    }

    #[test]
    fn color_light_rejects_non_hsb_state() {
        let item = Item::new(ItemType::Color).with_state("NULL");
        assert_eq!(
            DeviceKind::ColorLight.state(&item),
            Err(Error::Parse(ParseError::InvalidColor("NULL".to_string())))
        );
    }

    #[test]
    fn blinds_invert_position() {
        let open = Item::new(ItemType::Rollershutter).with_state("0");
        let partly = Item::new(ItemType::Rollershutter).with_state("25");
        assert_eq!(DeviceKind::Blinds.state(&open).unwrap().open_percent, Some(100.0));
        assert_eq!(DeviceKind::Blinds.state(&partly).unwrap().open_percent, Some(75.0));
    }

    #[test]
    fn inverted_blinds_report_position_directly() {
        let item = Item::new(ItemType::Rollershutter)
            .with_state("25")
            .with_config("inverted", true);
        assert_eq!(DeviceKind::Blinds.state(&item).unwrap().open_percent, Some(25.0));
    }

    #[test]
    fn fan_percent_is_rounded() {
        let item = Item::new(ItemType::Dimmer).with_state("66.6");
        assert_eq!(
            serde_json::to_value(DeviceKind::Fan.state(&item).unwrap()).unwrap(),
            json!({ "on": true, "currentFanSpeedPercent": 67 })
        );

        let item = Item::new(ItemType::Dimmer).with_state("0");
        let state = DeviceKind::Fan.state(&item).unwrap();
        assert_eq!(state.on, Some(false));
        assert_eq!(state.current_fan_speed_percent, Some(0));
    }

    #[test]
    fn fan_with_speeds_reports_setting_verbatim() {
        let item = Item::new(ItemType::Dimmer)
            .with_state("50")
            .with_config("speeds", "0=off,50=slow,100=fast");
        assert_eq!(
            serde_json::to_value(DeviceKind::Fan.state(&item).unwrap()).unwrap(),
            json!({ "on": true, "currentFanSpeedSetting": "50" })
        );
    }

    #[test]
    fn fan_with_word_speed_names_reports_name() {
        let item = Item::new(ItemType::Dimmer)
            .with_state("low")
            .with_config("speeds", "low=Low:Slow,high=High");
        assert_eq!(
            serde_json::to_value(DeviceKind::Fan.state(&item).unwrap()).unwrap(),
            json!({ "on": false, "currentFanSpeedSetting": "low" })
        );
    }

    #[test]
    fn fan_percent_is_clamped() {
        let item = Item::new(ItemType::Dimmer).with_state("250");
        assert_eq!(DeviceKind::Fan.state(&item).unwrap().current_fan_speed_percent, Some(100));

        let item = Item::new(ItemType::Dimmer).with_state("-5");
        let state = DeviceKind::Fan.state(&item).unwrap();
        assert_eq!(state.on, Some(false));
        assert_eq!(state.current_fan_speed_percent, Some(0));
    }

    #[test]
    fn non_numeric_state_is_an_error() {
        let item = Item::new(ItemType::Dimmer).with_state("UNDEF");
        assert_eq!(
            DeviceKind::Fan.state(&item),
            Err(Error::Parse(ParseError::InvalidNumber {
                field: "currentFanSpeedPercent",
                value: "UNDEF".to_string(),
            }))
        );
        assert!(DeviceKind::DimmableLight.state(&item).is_err());
        assert!(DeviceKind::Blinds.state(&item).is_err());
    }

    #[test]
    fn thermostat_without_members_is_empty() {
        let state = DeviceKind::Thermostat.state(&thermostat(&["Thermostat"])).unwrap();
        assert!(state.is_empty());
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({}));
    }

    #[test]
    fn thermostat_converts_fahrenheit() {
        let item = thermostat(&["Thermostat", "Fahrenheit"])
            .with_member(member("CurrentTemperature", "10"))
            .with_member(member("TargetTemperature", "20"))
            .with_member(member("HeatingCoolingMode", "off"));

        let state = DeviceKind::Thermostat.state(&item).unwrap();
        assert_eq!(state.thermostat_temperature_ambient, Some(-12.2));
        assert_eq!(state.thermostat_temperature_setpoint, Some(-6.7));
        assert_eq!(state.thermostat_mode.as_deref(), Some("off"));
        assert_eq!(state.thermostat_humidity_ambient, None);
    }

    #[test]
    fn thermostat_passes_celsius_through() {
        let item = thermostat(&["Thermostat"])
            .with_member(member("CurrentTemperature", "10"))
            .with_member(member("TargetTemperature", "20"))
            .with_member(member("HeatingCoolingMode", "heat"))
            .with_member(member("CurrentHumidity", "50"));

        assert_eq!(
            serde_json::to_value(DeviceKind::Thermostat.state(&item).unwrap()).unwrap(),
            json!({
                "thermostatTemperatureAmbient": 10.0,
                "thermostatTemperatureSetpoint": 20.0,
                "thermostatMode": "heat",
                "thermostatHumidityAmbient": 50.0
            })
        );
    }

    #[test]
    fn thermostat_fields_are_independent() {
        let item = thermostat(&["Thermostat"]).with_member(member("HeatingCoolingMode", "eco"));
        assert_eq!(
            DeviceKind::Thermostat.state(&item).unwrap(),
            DeviceState {
                thermostat_mode: Some("eco".to_string()),
                ..DeviceState::default()
            }
        );
    }

    #[test]
    fn thermostat_humidity_is_not_converted() {
        let item = thermostat(&["Thermostat", "Fahrenheit"])
            .with_member(member("CurrentHumidity", "50"));
        assert_eq!(
            DeviceKind::Thermostat.state(&item).unwrap().thermostat_humidity_ambient,
            Some(50.0)
        );
    }

    #[test]
    fn thermostat_ignores_unrelated_members() {
        let item = thermostat(&["Thermostat"])
            .with_member(member("Something", "1"))
            .with_member(member("Whatever", "2"));
        assert!(DeviceKind::Thermostat.state(&item).unwrap().is_empty());
    }

    #[test]
    fn thermostat_reads_dimensioned_members() {
        let item = thermostat(&["Thermostat"]).with_member(
            Item::new(ItemType::Number)
                .with_tags(["CurrentTemperature"])
                .with_state("21.5 °C"),
        );
        assert_eq!(
            DeviceKind::Thermostat.state(&item).unwrap().thermostat_temperature_ambient,
            Some(21.5)
        );
    }

    #[test]
    fn thermostat_member_with_bad_state_is_an_error() {
        let item = thermostat(&["Thermostat"]).with_member(member("TargetTemperature", "NULL"));
        assert!(matches!(
            DeviceKind::Thermostat.state(&item),
            Err(Error::Parse(ParseError::InvalidNumber {
                field: "thermostatTemperatureSetpoint",
                ..
            }))
        ));
    }

    #[test]
    fn state_is_idempotent() {
        let item = thermostat(&["Thermostat", "Fahrenheit"])
            .with_member(member("CurrentTemperature", "68"));
        let first = DeviceKind::Thermostat.state(&item).unwrap();
        let second = DeviceKind::Thermostat.state(&item).unwrap();
        assert_eq!(first, second);
    }
}
