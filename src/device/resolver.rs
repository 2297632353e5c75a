// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item to device resolution.

use super::DeviceKind;
use crate::item::Item;

/// Resolves an item to the device kind it is exposed as.
///
/// Kinds are tried in [`DeviceKind::CATALOG`] order and the first kind the
/// item is eligible for wins. Returns `None` when no kind accepts the item,
/// which is the normal outcome for items that are not exposed.
#[must_use]
pub fn resolve(item: &Item) -> Option<DeviceKind> {
    let kind = DeviceKind::CATALOG
        .into_iter()
        .find(|kind| kind.accepts(item));

    match kind {
        Some(kind) => tracing::trace!(
            item = %item.name,
            effective_type = %item.effective_type(),
            kind = kind.name(),
            "Resolved item"
        ),
        None => tracing::trace!(
            item = %item.name,
            effective_type = %item.effective_type(),
            "No device kind for item"
        ),
    }

    kind
}
