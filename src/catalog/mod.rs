// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Compiled-in SCSI name catalogs: mode pages, VPD pages, version
//! descriptors, and operation code / service action names.

/// Peripheral device types and the device-type sets entries are keyed by.
pub mod device_type;
mod mode_pages;
/// Operation code and service action tables.
pub mod opcodes;
mod version_descriptors;
mod vpd_pages;

use once_cell::sync::Lazy;

pub use self::device_type::{DeviceScope, DeviceTypes, PeripheralDeviceType};
use crate::lookup::{binary_search_simple, resolve_name};

/// `(key, name)` pair of a simple catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleEntry {
    pub key: u16,
    pub name: &'static str,
}

impl SimpleEntry {
    pub const fn new(key: u16, name: &'static str) -> Self {
        Self { key, name }
    }
}

/// Opcode or service action name, qualified by the device types it applies
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub value: u16,
    pub scope: DeviceScope,
    pub name: &'static str,
}

impl OpcodeEntry {
    pub const fn new(value: u16, scope: DeviceScope, name: &'static str) -> Self {
        Self { value, scope, name }
    }
}

/// The single-key catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCatalog {
    /// Keyed by `(page << 8) | subpage`.
    ModePage,
    /// Keyed by page code, or `(pdt << 8) | page` for device specific pages.
    VpdPage,
    VersionDescriptor,
}

static MODE_PAGES: Lazy<Vec<SimpleEntry>> =
    Lazy::new(|| sorted_unique(mode_pages::MODE_PAGE_NAMES));
static VPD_PAGES: Lazy<Vec<SimpleEntry>> =
    Lazy::new(|| sorted_unique(vpd_pages::VPD_PAGE_NAMES));
static VERSION_DESCRIPTORS: Lazy<Vec<SimpleEntry>> =
    Lazy::new(|| sorted_unique(version_descriptors::VERSION_DESCRIPTOR_NAMES));

/// Stable sort then drop repeated keys; the first occurrence of a key wins.
fn sorted_unique(raw: &[SimpleEntry]) -> Vec<SimpleEntry> {
    let mut v = raw.to_vec();
    v.sort_by_key(|e| e.key);
    let before = v.len();
    v.dedup_by_key(|e| e.key);
    if v.len() != before {
        tracing::debug!(
            dropped = before - v.len(),
            "duplicate keys removed from simple catalog"
        );
    }
    v
}

impl SimpleCatalog {
    /// Ascending, duplicate free view of the catalog.
    pub fn entries(self) -> &'static [SimpleEntry] {
        match self {
            SimpleCatalog::ModePage => &MODE_PAGES,
            SimpleCatalog::VpdPage => &VPD_PAGES,
            SimpleCatalog::VersionDescriptor => &VERSION_DESCRIPTORS,
        }
    }
}

/// Exact-key lookup; `None` when the key is not catalogued.
#[inline]
pub fn lookup_simple(catalog: SimpleCatalog, key: u16) -> Option<&'static str> {
    binary_search_simple(catalog.entries(), key)
}

pub fn mode_page_name(page: u8, subpage: u8) -> Option<&'static str> {
    lookup_simple(
        SimpleCatalog::ModePage,
        (u16::from(page & 0x3F) << 8) | u16::from(subpage),
    )
}

/// VPD page name; pages defined only for the given device type take
/// precedence over the generic page of the same number.
pub fn vpd_page_name(page: u8, pdt: Option<u8>) -> Option<&'static str> {
    if let Some(p) = pdt.filter(|&p| p > 0) {
        let qualified = (u16::from(p & device_type::PDT_MAX) << 8) | u16::from(page);
        if let Some(name) = lookup_simple(SimpleCatalog::VpdPage, qualified) {
            return Some(name);
        }
    }
    lookup_simple(SimpleCatalog::VpdPage, u16::from(page))
}

pub fn version_descriptor_name(code: u16) -> Option<&'static str> {
    lookup_simple(SimpleCatalog::VersionDescriptor, code)
}

/// Opcode catalog lookup; never empty, see [`crate::lookup`] for the rules.
#[inline]
pub fn lookup_opcode(opcode: u8, service_action: u16, sa_valid: bool, pdt: Option<u8>) -> String {
    resolve_name(opcode, service_action, sa_valid, pdt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_catalogs_are_strictly_ascending() {
        for cat in [
            SimpleCatalog::ModePage,
            SimpleCatalog::VpdPage,
            SimpleCatalog::VersionDescriptor,
        ] {
            let e = cat.entries();
            assert!(!e.is_empty());
            assert!(e.windows(2).all(|w| w[0].key < w[1].key), "{cat:?}");
        }
    }

    #[test]
    fn duplicate_mode_page_collapsed() {
        let hits = SimpleCatalog::ModePage
            .entries()
            .iter()
            .filter(|e| e.key == 0x1C02)
            .count();
        assert_eq!(hits, 1);
        assert_eq!(mode_page_name(0x1C, 0x02), Some("Logical block provisioning"));
    }

    #[test]
    fn mode_and_version_lookup() {
        assert_eq!(mode_page_name(0x08, 0x00), Some("Caching"));
        assert_eq!(mode_page_name(0x0A, 0xF1), Some("PATA control"));
        assert_eq!(mode_page_name(0x3E, 0x00), None);
        assert_eq!(version_descriptor_name(0x0000).map(|s| s.is_empty()), Some(false));
        assert_eq!(version_descriptor_name(0xFFC4), Some("IEEE 1667-2018"));
        assert_eq!(version_descriptor_name(0xFFFF), None);
    }

    #[test]
    fn vpd_prefers_device_specific_page() {
        assert_eq!(vpd_page_name(0xB0, Some(0x01)), Some("Sequential access Device Capabilities"));
        assert_eq!(vpd_page_name(0xB0, Some(0x00)), Some("Block limits"));
        assert_eq!(vpd_page_name(0xB0, None), Some("Block limits"));
        assert_eq!(vpd_page_name(0x83, Some(0x01)), Some("Device identification"));
        assert_eq!(vpd_page_name(0xFE, None), None);
    }
}
