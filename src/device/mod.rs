// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart home device catalog.
//!
//! This module maps openHAB items onto smart home devices. Every device kind
//! the library knows is a variant of [`DeviceKind`], and each kind declares:
//!
//! - the [`DeviceType`] it is reported as,
//! - the [`Trait`]s it always exposes,
//! - the item types it accepts and the tag that selects it,
//! - how it projects an item onto [`DeviceAttributes`] and [`DeviceState`].
//!
//! # Resolution
//!
//! [`resolve`] walks [`DeviceKind::CATALOG`] in order and returns the first
//! kind the item is eligible for. Specific kinds come before generic ones,
//! so a switch tagged `Lighting` resolves to a light and never to the plain
//! switch.
//!
//! ```
//! use ohga_lib::device::{self, DeviceKind};
//! use ohga_lib::{Item, ItemType};
//!
//! let item = Item::new(ItemType::Switch)
//!     .with_tags(["Lock"])
//!     .with_state("ON");
//!
//! let kind = device::resolve(&item).unwrap();
//! assert_eq!(kind, DeviceKind::Lock);
//! assert_eq!(kind.state(&item).unwrap().is_locked, Some(true));
//!
//! // A dimmer cannot be a blind
//! let item = Item::new(ItemType::Dimmer).with_tags(["Blinds"]);
//! assert!(device::resolve(&item).is_none());
//! ```
//!
//! # Projection
//!
//! Attributes only depend on the item's type, tags and configuration and
//! are computed once per discovery. State depends on the item's state and
//! members and is computed on every query. Neither mutates the item.

mod attributes;
mod resolver;
mod state;

use serde::Serialize;

pub use attributes::{
    AvailableFanSpeeds, COLOR_MODEL_HSV, DeviceAttributes, FanSpeedAttribute, SpeedValues,
    THERMOSTAT_MODES,
};
pub use resolver::resolve;
pub use state::{ColorState, DeviceState, FAHRENHEIT_TAG, SpectrumHsv, thermostat_tags};

use crate::error::Result;
use crate::item::{Item, ItemType};

/// Smart home device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceType {
    /// Plain on/off switch.
    #[serde(rename = "action.devices.types.SWITCH")]
    Switch,
    /// Light, with or without brightness and color.
    #[serde(rename = "action.devices.types.LIGHT")]
    Light,
    /// Water valve.
    #[serde(rename = "action.devices.types.VALVE")]
    Valve,
    /// Irrigation sprinkler.
    #[serde(rename = "action.devices.types.SPRINKLER")]
    Sprinkler,
    /// Door lock.
    #[serde(rename = "action.devices.types.LOCK")]
    Lock,
    /// Alarm system.
    #[serde(rename = "action.devices.types.SECURITYSYSTEM")]
    SecuritySystem,
    /// Window blinds or shutters.
    #[serde(rename = "action.devices.types.BLINDS")]
    Blinds,
    /// Fan.
    #[serde(rename = "action.devices.types.FAN")]
    Fan,
    /// Heating/cooling thermostat.
    #[serde(rename = "action.devices.types.THERMOSTAT")]
    Thermostat,
}

impl DeviceType {
    /// Returns the platform identifier of this device type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "action.devices.types.SWITCH",
            Self::Light => "action.devices.types.LIGHT",
            Self::Valve => "action.devices.types.VALVE",
            Self::Sprinkler => "action.devices.types.SPRINKLER",
            Self::Lock => "action.devices.types.LOCK",
            Self::SecuritySystem => "action.devices.types.SECURITYSYSTEM",
            Self::Blinds => "action.devices.types.BLINDS",
            Self::Fan => "action.devices.types.FAN",
            Self::Thermostat => "action.devices.types.THERMOSTAT",
        }
    }
}

/// Smart home capability trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trait {
    /// Turn on and off.
    #[serde(rename = "action.devices.traits.OnOff")]
    OnOff,
    /// Brightness percentage.
    #[serde(rename = "action.devices.traits.Brightness")]
    Brightness,
    /// Color in a color model.
    #[serde(rename = "action.devices.traits.ColorSetting")]
    ColorSetting,
    /// Open percentage.
    #[serde(rename = "action.devices.traits.OpenClose")]
    OpenClose,
    /// Start, stop and pause.
    #[serde(rename = "action.devices.traits.StartStop")]
    StartStop,
    /// Lock and unlock.
    #[serde(rename = "action.devices.traits.LockUnlock")]
    LockUnlock,
    /// Arm and disarm.
    #[serde(rename = "action.devices.traits.ArmDisarm")]
    ArmDisarm,
    /// Fan speed, as a percentage or a named setting.
    #[serde(rename = "action.devices.traits.FanSpeed")]
    FanSpeed,
    /// Thermostat modes and setpoints.
    #[serde(rename = "action.devices.traits.TemperatureSetting")]
    TemperatureSetting,
}

impl Trait {
    /// Returns the platform identifier of this trait.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnOff => "action.devices.traits.OnOff",
            Self::Brightness => "action.devices.traits.Brightness",
            Self::ColorSetting => "action.devices.traits.ColorSetting",
            Self::OpenClose => "action.devices.traits.OpenClose",
            Self::StartStop => "action.devices.traits.StartStop",
            Self::LockUnlock => "action.devices.traits.LockUnlock",
            Self::ArmDisarm => "action.devices.traits.ArmDisarm",
            Self::FanSpeed => "action.devices.traits.FanSpeed",
            Self::TemperatureSetting => "action.devices.traits.TemperatureSetting",
        }
    }
}

/// A device kind in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Light with on/off only.
    SimpleLight,
    /// Light with brightness.
    DimmableLight,
    /// Light with brightness and HSB color.
    ColorLight,
    /// Valve reported fully open or closed.
    Valve,
    /// Sprinkler that is either running or not.
    Sprinkler,
    /// Lock.
    Lock,
    /// Armed/disarmed security system.
    SecuritySystem,
    /// Blinds driven by a rollershutter.
    Blinds,
    /// Fan driven by a dimmer.
    Fan,
    /// Thermostat group.
    Thermostat,
    /// Generic switch.
    Switch,
}

impl DeviceKind {
    /// All kinds, in resolution priority order.
    ///
    /// Kinds sharing an item type are told apart by tag. The generic switch
    /// is last, so any more specific switch-based kind wins over it.
    pub const CATALOG: [Self; 11] = [
        Self::SimpleLight,
        Self::DimmableLight,
        Self::ColorLight,
        Self::Valve,
        Self::Sprinkler,
        Self::Lock,
        Self::SecuritySystem,
        Self::Blinds,
        Self::Fan,
        Self::Thermostat,
        Self::Switch,
    ];

    /// Returns the kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleLight => "SimpleLight",
            Self::DimmableLight => "DimmableLight",
            Self::ColorLight => "ColorLight",
            Self::Valve => "Valve",
            Self::Sprinkler => "Sprinkler",
            Self::Lock => "Lock",
            Self::SecuritySystem => "SecuritySystem",
            Self::Blinds => "Blinds",
            Self::Fan => "Fan",
            Self::Thermostat => "Thermostat",
            Self::Switch => "Switch",
        }
    }

    /// Returns the device type this kind is reported as.
    #[must_use]
    pub const fn device_type(self) -> DeviceType {
        match self {
            Self::SimpleLight | Self::DimmableLight | Self::ColorLight => DeviceType::Light,
            Self::Valve => DeviceType::Valve,
            Self::Sprinkler => DeviceType::Sprinkler,
            Self::Lock => DeviceType::Lock,
            Self::SecuritySystem => DeviceType::SecuritySystem,
            Self::Blinds => DeviceType::Blinds,
            Self::Fan => DeviceType::Fan,
            Self::Thermostat => DeviceType::Thermostat,
            Self::Switch => DeviceType::Switch,
        }
    }

    /// Returns the traits this kind always exposes.
    #[must_use]
    pub const fn traits(self) -> &'static [Trait] {
        match self {
            Self::SimpleLight | Self::Switch => &[Trait::OnOff],
            Self::DimmableLight => &[Trait::OnOff, Trait::Brightness],
            Self::ColorLight => &[Trait::OnOff, Trait::Brightness, Trait::ColorSetting],
            Self::Valve | Self::Blinds => &[Trait::OpenClose],
            Self::Sprinkler => &[Trait::StartStop],
            Self::Lock => &[Trait::LockUnlock],
            Self::SecuritySystem => &[Trait::ArmDisarm],
            Self::Fan => &[Trait::OnOff, Trait::FanSpeed],
            Self::Thermostat => &[Trait::TemperatureSetting],
        }
    }

    /// Returns the effective item types this kind accepts.
    #[must_use]
    pub const fn item_types(self) -> &'static [ItemType] {
        match self {
            Self::SimpleLight
            | Self::Valve
            | Self::Sprinkler
            | Self::Lock
            | Self::SecuritySystem
            | Self::Switch => &[ItemType::Switch],
            Self::DimmableLight | Self::Fan => &[ItemType::Dimmer],
            Self::ColorLight => &[ItemType::Color],
            Self::Blinds => &[ItemType::Rollershutter],
            Self::Thermostat => &[ItemType::Group],
        }
    }

    /// Returns the tag an item must carry to resolve to this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SimpleLight | Self::DimmableLight | Self::ColorLight => "Lighting",
            Self::Valve => "Valve",
            Self::Sprinkler => "Sprinkler",
            Self::Lock => "Lock",
            Self::SecuritySystem => "SecuritySystem",
            Self::Blinds => "Blinds",
            Self::Fan => "Fan",
            Self::Thermostat => "Thermostat",
            Self::Switch => "Switchable",
        }
    }

    /// Returns whether an item is eligible for this kind.
    ///
    /// Resolution returns the first eligible kind in [`Self::CATALOG`]; use
    /// [`resolve`] rather than calling this directly.
    #[must_use]
    pub fn accepts(self, item: &Item) -> bool {
        self.item_types().contains(&item.effective_type()) && item.has_tag(self.tag())
    }

    /// Projects an item onto this kind's static attributes.
    #[must_use]
    pub fn attributes(self, item: &Item) -> DeviceAttributes {
        DeviceAttributes::of(self, item)
    }

    /// Projects an item onto this kind's current state.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidNumber` or `ParseError::InvalidColor` if
    /// a state this kind must read as a number or color holds something else.
    pub fn state(self, item: &Item) -> Result<DeviceState> {
        DeviceState::of(self, item)
    }
}

/// A device resolved from an item.
///
/// # Examples
///
/// ```
/// use ohga_lib::{Item, ItemType, ResolvedDevice};
/// use ohga_lib::device::{DeviceType, Trait};
///
/// let item = Item::new(ItemType::Dimmer).with_tags(["Fan"]).with_state("42.6");
/// let device = ResolvedDevice::resolve(&item).unwrap();
///
/// assert_eq!(device.device_type(), DeviceType::Fan);
/// assert_eq!(device.traits(), [Trait::OnOff, Trait::FanSpeed]);
/// assert_eq!(device.attributes().supports_fan_speed_percent, Some(true));
/// assert_eq!(device.state().unwrap().current_fan_speed_percent, Some(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDevice<'a> {
    kind: DeviceKind,
    item: &'a Item,
}

impl<'a> ResolvedDevice<'a> {
    /// Resolves an item, returning `None` for unsupported items.
    #[must_use]
    pub fn resolve(item: &'a Item) -> Option<Self> {
        resolve(item).map(|kind| Self { kind, item })
    }

    /// Returns the resolved kind.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the item this device was resolved from.
    #[must_use]
    pub const fn item(&self) -> &'a Item {
        self.item
    }

    /// Returns the device type.
    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        self.kind.device_type()
    }

    /// Returns the exposed traits.
    #[must_use]
    pub const fn traits(&self) -> &'static [Trait] {
        self.kind.traits()
    }

    /// Returns the static attributes.
    #[must_use]
    pub fn attributes(&self) -> DeviceAttributes {
        self.kind.attributes(self.item)
    }

    /// Returns the current state.
    ///
    /// # Errors
    ///
    /// See [`DeviceKind::state`].
    pub fn state(&self) -> Result<DeviceState> {
        self.kind.state(self.item)
    }

    /// Returns the discovery description of this device.
    #[must_use]
    pub fn describe(&self) -> DeviceDescription {
        DeviceDescription {
            device_type: self.device_type(),
            traits: self.traits(),
            attributes: self.attributes(),
        }
    }
}

/// Discovery description of a resolved device.
///
/// Serializes to the type, traits and attributes fields of a device in a
/// discovery response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDescription {
    /// The device type.
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// The exposed traits.
    pub traits: &'static [Trait],
    /// The static attributes.
    pub attributes: DeviceAttributes,
}
