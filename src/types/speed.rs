// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed definitions parsed from item configuration.
//!
//! A fan item can declare named speeds in its `speeds` configuration value:
//!
//! ```text
//! low=Low:Slow, medium=Medium, high=High:Fast:Full
//! ```
//!
//! Entries are separated by `,`. Each entry is a speed name, an `=`, and a
//! `:`-separated list of synonyms. Whitespace around every part is ignored.

use std::str::FromStr;

use crate::error::ParseError;

/// A named fan speed and the phrases that select it.
///
/// # Examples
///
/// ```
/// use ohga_lib::types::FanSpeed;
///
/// let speed: FanSpeed = " low = Low : Slow ".parse().unwrap();
/// assert_eq!(speed.name(), "low");
/// assert_eq!(speed.synonyms(), ["Low", "Slow"]);
///
/// assert!("low".parse::<FanSpeed>().is_err());
/// assert!("low=".parse::<FanSpeed>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FanSpeed {
    name: String,
    synonyms: Vec<String>,
}

impl FanSpeed {
    /// Returns the speed name, as reported in the fan state.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the synonyms for this speed.
    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    /// Parses a full `speeds` configuration string.
    ///
    /// Each entry is parsed on its own. Malformed entries are logged and
    /// skipped, so one bad entry never hides the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohga_lib::types::FanSpeed;
    ///
    /// let speeds = FanSpeed::parse_list("a=1:2, b=");
    /// assert_eq!(speeds.len(), 1);
    /// assert_eq!(speeds[0].name(), "a");
    /// ```
    #[must_use]
    pub fn parse_list(definition: &str) -> Vec<Self> {
        definition
            .split(',')
            .map(str::parse::<Self>)
            .filter_map(|entry| match entry {
                Ok(speed) => Some(speed),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping fan speed entry");
                    None
                }
            })
            .collect()
    }
}

impl FromStr for FanSpeed {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        let malformed = |reason| ParseError::MalformedSpeedEntry {
            entry: entry.to_string(),
            reason,
        };

        let (name, synonyms) = entry
            .split_once('=')
            .ok_or_else(|| malformed("missing '=' separator"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed("empty speed name"));
        }

        let synonyms: Vec<String> = synonyms
            .split(':')
            .map(str::trim)
            .filter(|synonym| !synonym.is_empty())
            .map(String::from)
            .collect();
        if synonyms.is_empty() {
            return Err(malformed("empty synonym list"));
        }

        Ok(Self {
            name: name.to_string(),
            synonyms,
        })
    }
}
