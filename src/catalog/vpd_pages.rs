// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! VPD page names.
//!
//! Pages that only exist for one peripheral device type are keyed by
//! `(pdt << 8) | page`; common pages use the bare page code.

use crate::catalog::SimpleEntry;

pub(crate) static VPD_PAGE_NAMES: &[SimpleEntry] = &[
    SimpleEntry::new(0x0000, "Supported VPD pages"),
    SimpleEntry::new(0x0080, "Unit serial number"),
    SimpleEntry::new(0x0081, "Implemented operating definition (obsolete)"),
    SimpleEntry::new(0x0082, "ASCII implemented operating definition (obsolete)"),
    SimpleEntry::new(0x0083, "Device identification"),
    SimpleEntry::new(0x0084, "Software interface identification"),
    SimpleEntry::new(0x0085, "Management network addresses"),
    SimpleEntry::new(0x0086, "Extended INQUIRY data"),
    SimpleEntry::new(0x0087, "Mode page policy"),
    SimpleEntry::new(0x0088, "SCSI ports"),
    SimpleEntry::new(0x0089, "ATA information"),
    SimpleEntry::new(0x008a, "Power condition"),
    SimpleEntry::new(0x008b, "Device constituents"),
    SimpleEntry::new(0x008c, "CFA profile information"),
    SimpleEntry::new(0x008d, "Power consumption"),
    SimpleEntry::new(0x008f, "Third party copy"),
    SimpleEntry::new(0x0090, "Protocol specific logical unit information"),
    SimpleEntry::new(0x0091, "Protocol specific port information"),
    SimpleEntry::new(0x0092, "SCSI feature sets"),
    SimpleEntry::new(0x00b0, "Block limits"),
    SimpleEntry::new(0x00b1, "Block device characteristics"),
    SimpleEntry::new(0x00b2, "Logical block provisioning"),
    SimpleEntry::new(0x00b3, "Referrals"),
    SimpleEntry::new(0x00b4, "Supported Block Lengths and Protection Types"),
    SimpleEntry::new(0x00b5, "Block device characteristics extension"),
    SimpleEntry::new(0x00b6, "Zoned block device characteristics"),
    SimpleEntry::new(0x00b7, "Block limits extension"),
    SimpleEntry::new(0x00b8, "Format presets"),
    SimpleEntry::new(0x00b9, "Concurrent positioning ranges"),
    SimpleEntry::new(0x01b0, "Sequential access Device Capabilities"),
    SimpleEntry::new(0x01b1, "Manufacturer-assigned serial number"),
    SimpleEntry::new(0x01b2, "TapeAlert supported flags"),
    SimpleEntry::new(0x01b3, "Automation device serial number"),
    SimpleEntry::new(0x01b4, "Data transfer device element address"),
    SimpleEntry::new(0x01b5, "Data transfer device element address"),
    SimpleEntry::new(0x11b0, "OSD information"),
    SimpleEntry::new(0x11b1, "Security token"),
];
