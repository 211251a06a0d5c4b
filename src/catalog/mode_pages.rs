// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Mode page names keyed by `(page << 8) | subpage`.
//!
//! SPC pages first, then SBC and ZBC; tape, changer and transport pages are
//! slotted in where they do not collide. Kept in ascending key order.

use crate::catalog::SimpleEntry;

pub(crate) static MODE_PAGE_NAMES: &[SimpleEntry] = &[
    SimpleEntry::new(0x0000, "Unit Attention condition"),
    SimpleEntry::new(0x0100, "Read-Write error recovery"),
    SimpleEntry::new(0x0200, "Disconnect-Reconnect"),
    SimpleEntry::new(0x0300, "Format (obsolete)"),
    SimpleEntry::new(0x0400, "Rigid disk geometry (obsolete)"),
    SimpleEntry::new(0x0500, "Flexible disk (obsolete)"),
    SimpleEntry::new(0x0700, "Verify error recovery"),
    SimpleEntry::new(0x0800, "Caching"),
    SimpleEntry::new(0x0900, "Peripheral device (obsolete)"),
    SimpleEntry::new(0x0a00, "Control"),
    SimpleEntry::new(0x0a01, "Control extension"),
    SimpleEntry::new(0x0a02, "Application tag"),
    SimpleEntry::new(0x0a03, "Command duration limit A"),
    SimpleEntry::new(0x0a04, "Command duration limit B"),
    SimpleEntry::new(0x0a05, "IO Advice Hints Grouping"),
    SimpleEntry::new(0x0a06, "Background operation control"),
    SimpleEntry::new(0x0af0, "Control data protection"),
    SimpleEntry::new(0x0af1, "PATA control"),
    SimpleEntry::new(0x0b00, "Medium Types Supported (obsolete)"),
    SimpleEntry::new(0x0c00, "Notch and partition (obsolete)"),
    SimpleEntry::new(0x0d00, "Power condition (obsolete), CD device parameters"),
    SimpleEntry::new(0x0e00, "CD audio control"),
    SimpleEntry::new(0x0e01, "Target device"),
    SimpleEntry::new(0x0e02, "DT device primary port"),
    SimpleEntry::new(0x0e03, "Logical unit"),
    SimpleEntry::new(0x0e04, "Target device serial number"),
    SimpleEntry::new(0x0f00, "Data compression"),
    SimpleEntry::new(0x1000, "XOR control (obsolete, Device configuration"),
    SimpleEntry::new(0x1001, "Device configuration extension"),
    SimpleEntry::new(0x1100, "Medium partition (1)"),
    SimpleEntry::new(0x1400, "Enclosure services management"),
    SimpleEntry::new(0x1800, "Protocol specific logical unit"),
    SimpleEntry::new(0x1900, "Protocol specific port"),
    SimpleEntry::new(0x1901, "Phy control and discovery"),
    SimpleEntry::new(0x1902, "Shared port control"),
    SimpleEntry::new(0x1903, "Enhanced phy control"),
    SimpleEntry::new(0x1904, "Out of band  management control"),
    SimpleEntry::new(0x1a00, "Power condition"),
    SimpleEntry::new(0x1a01, "Power consumption"),
    SimpleEntry::new(0x1af1, "ATA Power condition"),
    SimpleEntry::new(0x1b00, "LUN mapping"),
    SimpleEntry::new(0x1c00, "Information exceptions control"),
    SimpleEntry::new(0x1c01, "Background control"),
    SimpleEntry::new(0x1c02, "Logical block provisioning"),
    SimpleEntry::new(0x1c02, "Logical block provisioning"),
    SimpleEntry::new(0x1d00, "Medium configuration, CD/DVD timeout, element address assignments"),
    SimpleEntry::new(0x1e00, "Transport geometry assignments"),
    SimpleEntry::new(0x1f00, "Device capabilities"),
];
