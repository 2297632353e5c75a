// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! openHAB item documents.
//!
//! An [`Item`] is the entity under translation: a typed value holder with a
//! string-encoded state, semantic tags, optional metadata and, for groups,
//! an ordered list of member items. Items deserialize directly from the
//! openHAB REST API item JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Metadata namespace holding smart home device configuration.
pub const METADATA_NAMESPACE: &str = "ga";

/// Base kind of an openHAB item.
///
/// Dimensioned numeric types such as `Number:Temperature` normalize to
/// [`ItemType::Number`]. Types this library does not know map to
/// [`ItemType::Other`] and never resolve to a device.
///
/// # Examples
///
/// ```
/// use ohga_lib::ItemType;
///
/// assert_eq!("Dimmer".parse::<ItemType>().unwrap(), ItemType::Dimmer);
/// assert_eq!("Number:Temperature".parse::<ItemType>().unwrap(), ItemType::Number);
/// assert_eq!("Image".parse::<ItemType>().unwrap(), ItemType::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ItemType {
    /// On/off switch.
    Switch,
    /// Percentage value with on/off semantics.
    Dimmer,
    /// HSB color.
    Color,
    /// Blind or shutter position.
    Rollershutter,
    /// Numeric value, with or without a dimension.
    Number,
    /// Free text.
    String,
    /// Open/closed contact.
    Contact,
    /// Group of member items.
    Group,
    /// Any other openHAB item type.
    Other,
}

impl ItemType {
    /// Returns the openHAB type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "Switch",
            Self::Dimmer => "Dimmer",
            Self::Color => "Color",
            Self::Rollershutter => "Rollershutter",
            Self::Number => "Number",
            Self::String => "String",
            Self::Contact => "Contact",
            Self::Group => "Group",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ItemType {
    fn from(value: &str) -> Self {
        let base = value.split_once(':').map_or(value, |(base, _dimension)| base);
        match base {
            "Switch" => Self::Switch,
            "Dimmer" => Self::Dimmer,
            "Color" => Self::Color,
            "Rollershutter" => Self::Rollershutter,
            "Number" => Self::Number,
            "String" => Self::String,
            "Contact" => Self::Contact,
            "Group" => Self::Group,
            _ => Self::Other,
        }
    }
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for ItemType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// One metadata namespace attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemMetadata {
    /// The namespace's main value.
    #[serde(default)]
    pub value: String,

    /// Free-form key/value configuration.
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// An openHAB item, as received from the REST API.
///
/// # Examples
///
/// ```
/// use ohga_lib::{Item, ItemType};
///
/// let json = r#"{
///     "type": "Group",
///     "groupType": "Dimmer",
///     "name": "LivingRoomLights",
///     "state": "40",
///     "tags": ["Lighting"]
/// }"#;
/// let item: Item = serde_json::from_str(json).unwrap();
///
/// assert_eq!(item.effective_type(), ItemType::Dimmer);
/// assert!(item.has_tag("Lighting"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Declared item type.
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Base type of a group item, if the group declares one.
    #[serde(default)]
    pub group_type: Option<ItemType>,

    /// Item name.
    #[serde(default)]
    pub name: String,

    /// Human readable label.
    #[serde(default)]
    pub label: Option<String>,

    /// String-encoded current state.
    #[serde(default)]
    pub state: String,

    /// Semantic tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Member items of a group.
    #[serde(default)]
    pub members: Vec<Item>,

    /// Metadata by namespace.
    #[serde(default)]
    pub metadata: BTreeMap<String, ItemMetadata>,
}

impl Item {
    /// Creates an item of the given type with no state, tags or members.
    #[must_use]
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            group_type: None,
            name: String::new(),
            label: None,
            state: String::new(),
            tags: Vec::new(),
            members: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Creates a group item with the given base type.
    #[must_use]
    pub fn group(group_type: ItemType) -> Self {
        Self::new(ItemType::Group).with_group_type(group_type)
    }

    /// Sets the item name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group base type.
    #[must_use]
    pub fn with_group_type(mut self, group_type: ItemType) -> Self {
        self.group_type = Some(group_type);
        self
    }

    /// Sets the state string.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Adds tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Appends a member item.
    #[must_use]
    pub fn with_member(mut self, member: Item) -> Self {
        self.members.push(member);
        self
    }

    /// Sets one device configuration value in the `ga` metadata namespace.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .entry(METADATA_NAMESPACE.to_string())
            .or_default()
            .config
            .insert(key.into(), value.into());
        self
    }

    /// Returns the type used for device matching.
    ///
    /// A group that declares a base type matches as that type; every other
    /// item matches as its declared type.
    #[must_use]
    pub fn effective_type(&self) -> ItemType {
        match (self.item_type, self.group_type) {
            (ItemType::Group, Some(group_type)) => group_type,
            (item_type, _) => item_type,
        }
    }

    /// Returns whether the item carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns the first member carrying the given tag.
    ///
    /// Members are searched in order; later members with the same tag are
    /// ignored.
    #[must_use]
    pub fn member_with_tag(&self, tag: &str) -> Option<&Item> {
        self.members.iter().find(|member| member.has_tag(tag))
    }

    /// Returns the device configuration object, if any.
    #[must_use]
    pub fn device_config(&self) -> Option<&Map<String, Value>> {
        self.metadata
            .get(METADATA_NAMESPACE)
            .map(|metadata| &metadata.config)
    }
}
