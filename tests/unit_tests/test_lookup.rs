// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use scsi_opcodes_rs::{
    catalog::{
        PeripheralDeviceType, SimpleCatalog, lookup_opcode, lookup_simple, mode_page_name,
        vpd_page_name,
    },
    lookup::{NAME_MAX_LEN, enumerate_name, resolve_name},
};

#[test]
fn test_vendor_specific_without_device_type() {
    assert_eq!(resolve_name(0xFF, 0, false, None), "Vendor specific [0xff]");
}

#[test]
fn test_resolution_is_total() {
    let device_types = std::iter::once(None).chain((0u8..=31).map(Some));
    for pdt in device_types {
        for opcode in 0u8..=255 {
            for (sa, valid) in [(0, false), (0, true), (0x10, true), (0xFFFF, true)] {
                let name = resolve_name(opcode, sa, valid, pdt);
                assert!(!name.is_empty(), "{opcode:#x}/{sa:#x}/{pdt:?}");
                assert!(name.len() <= NAME_MAX_LEN);
            }
        }
    }
}

#[test]
fn test_lookup_opcode_matches_resolve() {
    assert_eq!(
        lookup_opcode(0x5F, 0x01, true, Some(0)),
        "Persistent reserve out, reserve"
    );
    assert_eq!(lookup_opcode(0x5F, 0x01, true, Some(0)), resolve_name(0x5F, 1, true, Some(0)));
}

#[test]
fn test_decayed_device_types() {
    // host managed zoned and RBC devices use disk names
    assert_eq!(resolve_name(0x01, 0, false, Some(0x14)), "Rezero Unit");
    assert_eq!(resolve_name(0x42, 0, false, Some(0x0E)), "Unmap");
    // automation/drive interface uses tape names
    assert_eq!(resolve_name(0x34, 0x06, true, Some(0x12)), "Read position (long form)");
}

#[test]
fn test_service_action_tables_without_zoned_device() {
    // a plain disk and an unknown device type still name zoned and sanitize actions
    for pdt in [Some(0x00), None] {
        assert_eq!(resolve_name(0x95, 0x00, true, pdt), "Report zones");
        assert_eq!(resolve_name(0x94, 0x01, true, pdt), "Close zone");
        assert_eq!(resolve_name(0x48, 0x01, true, pdt), "Sanitize, overwrite");
    }
    // READ POSITION actions only exist on tape
    assert_eq!(
        resolve_name(0x34, 0x06, true, Some(0x00)),
        "Pre-fetch(10) service action=0x6"
    );
    assert_eq!(
        enumerate_name(0x34, Some(0x06), None),
        "Pre-fetch(10) service action=0x6"
    );
}

#[test]
fn test_enumerate() {
    assert_eq!(enumerate_name(0xA3, Some(0x0D), None), "Report supported task management functions");
    assert_eq!(enumerate_name(0x12, None, Some(0x05)), "Inquiry");
}

#[test]
fn test_simple_catalogs() {
    assert_eq!(mode_page_name(0x1C, 0x00), Some("Information exceptions control"));
    assert_eq!(vpd_page_name(0x00, None), Some("Supported VPD pages"));
    assert_eq!(lookup_simple(SimpleCatalog::VersionDescriptor, 0x0960), Some("iSCSI (no version claimed)"));
    assert_eq!(lookup_simple(SimpleCatalog::ModePage, 0xFFFF), None);
}

#[test]
fn test_device_type_names() {
    assert_eq!(PeripheralDeviceType(0x00).name(), "disk");
    assert_eq!(PeripheralDeviceType(0x1E).name(), "well known logical unit");
}
