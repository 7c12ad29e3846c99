// SPDX-License-Identifier: MPL-2.0
//! Deep-link fragments of the form `event-<id>`.

use crate::config::HASH_PREFIX;
use crate::domain::item::ItemId;

/// Fragment addressing `id`, without the leading `#`.
#[must_use]
pub fn encode(id: &ItemId) -> String {
    format!("{HASH_PREFIX}{id}")
}

/// Identifier addressed by a fragment. A leading `#` is accepted.
#[must_use]
pub fn decode(fragment: &str) -> Option<ItemId> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .strip_prefix(HASH_PREFIX)
        .filter(|id| !id.is_empty())
        .map(ItemId::from)
}
