// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Presentation order of the all-commands list.

use serde::{Deserialize, Serialize};

use crate::models::CommandDescriptor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Order the device returned.
    #[serde(alias = "Unsorted", alias = "unsorted", alias = "as_received")]
    AsReceived,
    /// By operation code, then service action.
    #[default]
    #[serde(alias = "numeric", alias = "Opcode", alias = "opcode")]
    Numeric,
    /// By resolved name, byte-wise.
    #[serde(alias = "alphabetic", alias = "Alpha", alias = "alpha", alias = "Name")]
    Alphabetic,
}

/// Stable in-place sort. `pdt` selects the names used for
/// [`SortOrder::Alphabetic`].
pub fn order_descriptors(descriptors: &mut [CommandDescriptor], order: SortOrder, pdt: Option<u8>) {
    match order {
        SortOrder::AsReceived => {},
        SortOrder::Numeric => descriptors.sort_by_key(CommandDescriptor::numeric_key),
        SortOrder::Alphabetic => descriptors.sort_by_cached_key(|d| d.name_for(pdt)),
    }
    tracing::debug!(?order, count = descriptors.len(), "ordered descriptors");
}
