// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ohga` library.
//!
//! Only state projection can fail: an item whose state must be read as a
//! number (or an HSB triple) but holds something else. Resolution failures
//! are not errors and are expressed as `None`. Malformed fan speed entries
//! are recovered per entry and never reach the caller.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Error occurred while reading an item state or configuration string.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to parsing item states and configuration strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A state that must be numeric could not be parsed.
    #[error("failed to parse {field} as a number: {value:?}")]
    InvalidNumber {
        /// The state field being projected.
        field: &'static str,
        /// The raw state string.
        value: String,
    },

    /// A color state is not a `hue,saturation,brightness` triple.
    #[error("invalid HSB color state: {0:?}")]
    InvalidColor(String),

    /// A single fan speed entry could not be parsed.
    #[error("malformed fan speed entry {entry:?}: {reason}")]
    MalformedSpeedEntry {
        /// The trimmed entry text.
        entry: String,
        /// Why the entry was rejected.
        reason: &'static str,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
