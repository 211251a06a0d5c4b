// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Name resolution over the compiled-in catalogs.
//!
//! Simple catalogs are binary searched on an exact key. Operation codes are
//! resolved in this order:
//!
//! ```text
//!  1. entry whose device-type set holds the PDT (or its decayed base type)
//!  2. wildcard entry (all device types)
//!  3. first entry for the key
//!  4. placeholder from the opcode group:
//!       group 3     -> "Reserved [0x..]"
//!       groups 6,7  -> "Vendor specific [0x..]"
//!       otherwise   -> "Opcode=0x.."
//! ```
//!
//! With a valid service action the same rules run inside the opcode's
//! service action table; a miss there yields
//! `"<opcode name> service action=0x.."`.

use crate::catalog::{
    OpcodeEntry, SimpleEntry,
    device_type::decay_pdt,
    opcodes::{NORMAL_OPCODES, SERVICE_ACTION_TABLES, ServiceActionTable},
};

/// Longest name handed out, in bytes (a 128 byte buffer less its NUL).
pub const NAME_MAX_LEN: usize = 127;

pub(crate) fn binary_search_simple(entries: &[SimpleEntry], key: u16) -> Option<&'static str> {
    entries
        .binary_search_by_key(&key, |e| e.key)
        .ok()
        .and_then(|i| entries.get(i))
        .map(|e| e.name)
}

/// Best entry for `value` among `entries` (ascending by value).
pub fn best_match(
    entries: &'static [OpcodeEntry],
    value: u16,
    pdt: Option<u8>,
) -> Option<&'static OpcodeEntry> {
    let start = entries.partition_point(|e| e.value < value);
    let tail = &entries[start..];
    let group = &tail[..tail.partition_point(|e| e.value == value)];
    if group.is_empty() {
        return None;
    }

    if let Some(p) = pdt {
        if let Some(e) = group.iter().find(|e| e.scope.contains_exact(p)) {
            return Some(e);
        }
        let base = decay_pdt(p);
        if base != p
            && let Some(e) = group.iter().find(|e| e.scope.contains_exact(base))
        {
            return Some(e);
        }
    }

    group
        .iter()
        .find(|e| e.scope.is_wildcard())
        .or_else(|| group.first())
}

/// Service action table for `opcode`, when one applies to `pdt`.
pub fn service_action_table(opcode: u8, pdt: Option<u8>) -> Option<&'static ServiceActionTable> {
    SERVICE_ACTION_TABLES
        .binary_search_by_key(&opcode, |t| t.opcode)
        .ok()
        .and_then(|i| SERVICE_ACTION_TABLES.get(i))
        .filter(|t| t.scope.admits(pdt))
}

/// Name of an operation code used without a service action.
pub fn opcode_name(opcode: u8, pdt: Option<u8>) -> String {
    if let Some(e) = best_match(NORMAL_OPCODES, u16::from(opcode), pdt) {
        return bounded(e.name.to_string());
    }
    match opcode >> 5 {
        3 => format!("Reserved [0x{opcode:x}]"),
        6 | 7 => format!("Vendor specific [0x{opcode:x}]"),
        _ => format!("Opcode=0x{opcode:x}"),
    }
}

/// Resolve `(opcode, service action, pdt)` to a display name. Never empty.
pub fn resolve_name(opcode: u8, service_action: u16, sa_valid: bool, pdt: Option<u8>) -> String {
    if !sa_valid {
        return opcode_name(opcode, pdt);
    }
    service_action_table(opcode, pdt)
        .and_then(|t| best_match(t.entries, service_action, pdt))
        .map(|e| bounded(e.name.to_string()))
        .unwrap_or_else(|| {
            bounded(format!(
                "{} service action=0x{service_action:x}",
                opcode_name(opcode, pdt)
            ))
        })
}

/// Name-only query, for use without a device or response buffer.
pub fn enumerate_name(opcode: u8, service_action: Option<u16>, pdt: Option<u8>) -> String {
    resolve_name(
        opcode,
        service_action.unwrap_or(0),
        service_action.is_some(),
        pdt,
    )
}

/// Cut to at most [`NAME_MAX_LEN`] bytes on a character boundary.
pub fn bounded(mut name: String) -> String {
    if name.len() > NAME_MAX_LEN {
        let mut end = NAME_MAX_LEN;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    name
}
