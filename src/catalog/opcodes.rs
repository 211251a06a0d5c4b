// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! SCSI operation code names (SPC-6, SBC-5, SSC-7, MMC-6, SMC-3, SES-4, ZBC-2).
//!
//! Entries sharing an operation code are adjacent, the wildcard (all device
//! types) entry first, followed by device-type specific overrides.

use super::{
    OpcodeEntry,
    device_type::{DeviceScope, DeviceTypes},
};

const ALL: DeviceScope = DeviceScope::All;
const DISK: DeviceScope = DeviceScope::Only(DeviceTypes::DISK);
const TAPE: DeviceScope = DeviceScope::Only(DeviceTypes::TAPE);
const PRINTER: DeviceScope = DeviceScope::Only(DeviceTypes::PRINTER);
const PROCESSOR: DeviceScope = DeviceScope::Only(DeviceTypes::PROCESSOR);
const WO: DeviceScope = DeviceScope::Only(DeviceTypes::WO);
const MMC: DeviceScope = DeviceScope::Only(DeviceTypes::MMC);
const MCHANGER: DeviceScope = DeviceScope::Only(DeviceTypes::MCHANGER);
const OCRW: DeviceScope = DeviceScope::Only(DeviceTypes::OCRW);
const ADC: DeviceScope = DeviceScope::Only(DeviceTypes::ADC);
const ZBC: DeviceScope = DeviceScope::Only(DeviceTypes::ZBC);

/// Operation codes without a service action, ascending.
pub(crate) static NORMAL_OPCODES: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Test Unit Ready"),
    OpcodeEntry::new(0x01, ALL, "Rezero Unit"),
    OpcodeEntry::new(0x01, TAPE, "Rewind"),
    OpcodeEntry::new(0x03, ALL, "Request Sense"),
    OpcodeEntry::new(0x04, ALL, "Format Unit"),
    OpcodeEntry::new(0x04, TAPE, "Format medium"),
    OpcodeEntry::new(0x04, PRINTER, "Format"),
    OpcodeEntry::new(0x05, TAPE, "Read block limits"),
    OpcodeEntry::new(0x07, ALL, "Reassign blocks"),
    OpcodeEntry::new(0x07, MCHANGER, "Initialize element status"),
    OpcodeEntry::new(0x08, ALL, "Read(6)"),
    OpcodeEntry::new(0x08, PROCESSOR, "Receive"),
    OpcodeEntry::new(0x0A, ALL, "Write(6)"),
    OpcodeEntry::new(0x0A, PRINTER, "Print"),
    OpcodeEntry::new(0x0A, PROCESSOR, "Send"),
    OpcodeEntry::new(0x0B, ALL, "Seek(6)"),
    OpcodeEntry::new(0x0B, TAPE, "Set capacity"),
    OpcodeEntry::new(0x0B, PRINTER, "Slew and print"),
    OpcodeEntry::new(0x0F, TAPE, "Read reverse(6)"),
    OpcodeEntry::new(0x10, ALL, "Synchronize buffer"),
    OpcodeEntry::new(0x10, TAPE, "Write filemarks(6)"),
    OpcodeEntry::new(0x11, TAPE, "Space(6)"),
    OpcodeEntry::new(0x12, ALL, "Inquiry"),
    OpcodeEntry::new(0x13, TAPE, "Verify(6)"),
    OpcodeEntry::new(0x14, ALL, "Recover buffered data"),
    OpcodeEntry::new(0x15, ALL, "Mode select(6)"),
    OpcodeEntry::new(0x16, ALL, "Reserve(6)"),
    OpcodeEntry::new(0x16, MCHANGER, "Reserve element(6)"),
    OpcodeEntry::new(0x17, ALL, "Release(6)"),
    OpcodeEntry::new(0x17, MCHANGER, "Release element(6)"),
    OpcodeEntry::new(0x18, ALL, "Copy"),
    OpcodeEntry::new(0x19, TAPE, "Erase(6)"),
    OpcodeEntry::new(0x1A, ALL, "Mode sense(6)"),
    OpcodeEntry::new(0x1B, ALL, "Start stop unit"),
    OpcodeEntry::new(0x1B, TAPE, "Load unload"),
    OpcodeEntry::new(0x1B, ADC, "Load unload"),
    OpcodeEntry::new(0x1B, PRINTER, "Stop print"),
    OpcodeEntry::new(0x1C, ALL, "Receive diagnostic results"),
    OpcodeEntry::new(0x1D, ALL, "Send diagnostic"),
    OpcodeEntry::new(0x1E, ALL, "Prevent allow medium removal"),
    OpcodeEntry::new(0x23, MMC, "Read Format capacities"),
    OpcodeEntry::new(0x24, ALL, "Set window"),
    OpcodeEntry::new(0x25, ALL, "Read capacity(10)"),
    OpcodeEntry::new(0x25, OCRW, "Read card capacity"),
    OpcodeEntry::new(0x28, ALL, "Read(10)"),
    OpcodeEntry::new(0x29, ALL, "Read generation"),
    OpcodeEntry::new(0x2A, ALL, "Write(10)"),
    OpcodeEntry::new(0x2B, ALL, "Seek(10)"),
    OpcodeEntry::new(0x2B, TAPE, "Locate(10)"),
    OpcodeEntry::new(0x2B, MCHANGER, "Position to element"),
    OpcodeEntry::new(0x2C, ALL, "Erase(10)"),
    OpcodeEntry::new(0x2D, WO, "Read updated block"),
    OpcodeEntry::new(0x2E, ALL, "Write and verify(10)"),
    OpcodeEntry::new(0x2F, ALL, "Verify(10)"),
    OpcodeEntry::new(0x30, ALL, "Search data high(10)"),
    OpcodeEntry::new(0x31, ALL, "Search data equal(10)"),
    OpcodeEntry::new(0x32, ALL, "Search data low(10)"),
    OpcodeEntry::new(0x33, ALL, "Set limits(10)"),
    OpcodeEntry::new(0x34, ALL, "Pre-fetch(10)"),
    OpcodeEntry::new(0x34, TAPE, "Read position"),
    OpcodeEntry::new(0x35, ALL, "Synchronize cache(10)"),
    OpcodeEntry::new(0x36, ALL, "Lock unlock cache(10)"),
    OpcodeEntry::new(0x37, ALL, "Read defect data(10)"),
    OpcodeEntry::new(0x37, MCHANGER, "Initialize element status with range"),
    OpcodeEntry::new(0x38, ALL, "Medium scan"),
    OpcodeEntry::new(0x39, ALL, "Compare"),
    OpcodeEntry::new(0x3A, ALL, "Copy and verify"),
    OpcodeEntry::new(0x3B, ALL, "Write buffer"),
    OpcodeEntry::new(0x3C, ALL, "Read buffer(10)"),
    OpcodeEntry::new(0x3D, ALL, "Update block"),
    OpcodeEntry::new(0x3E, ALL, "Read long(10)"),
    OpcodeEntry::new(0x3F, ALL, "Write long(10)"),
    OpcodeEntry::new(0x40, ALL, "Change definition"),
    OpcodeEntry::new(0x41, ALL, "Write same(10)"),
    OpcodeEntry::new(0x42, DISK, "Unmap"),
    OpcodeEntry::new(0x42, MMC, "Read sub-channel"),
    OpcodeEntry::new(0x43, MMC, "Read TOC/PMA/ATIP"),
    OpcodeEntry::new(0x44, ALL, "Report density support"),
    OpcodeEntry::new(0x45, MMC, "Play audio(10)"),
    OpcodeEntry::new(0x46, MMC, "Get configuration"),
    OpcodeEntry::new(0x47, MMC, "Play audio msf"),
    OpcodeEntry::new(0x48, ALL, "Sanitize"),
    OpcodeEntry::new(0x4A, MMC, "Get event status notification"),
    OpcodeEntry::new(0x4B, MMC, "Pause/resume"),
    OpcodeEntry::new(0x4C, ALL, "Log select"),
    OpcodeEntry::new(0x4D, ALL, "Log sense"),
    OpcodeEntry::new(0x4E, MMC, "Stop play/scan"),
    OpcodeEntry::new(0x50, DISK, "Xdwrite(10)"),
    OpcodeEntry::new(0x51, DISK, "Xpwrite(10)"),
    OpcodeEntry::new(0x51, MMC, "Read disk information"),
    OpcodeEntry::new(0x52, DISK, "Xdread(10)"),
    OpcodeEntry::new(0x52, MMC, "Read track information"),
    OpcodeEntry::new(0x53, DISK, "Xdwriteread(10)"),
    OpcodeEntry::new(0x53, MMC, "Reserve track"),
    OpcodeEntry::new(0x54, MMC, "Send OPC information"),
    OpcodeEntry::new(0x55, ALL, "Mode select(10)"),
    OpcodeEntry::new(0x56, ALL, "Reserve(10)"),
    OpcodeEntry::new(0x56, MCHANGER, "Reserve element(10)"),
    OpcodeEntry::new(0x57, ALL, "Release(10)"),
    OpcodeEntry::new(0x57, MCHANGER, "Release element(10)"),
    OpcodeEntry::new(0x58, MMC, "Repair track"),
    OpcodeEntry::new(0x5A, ALL, "Mode sense(10)"),
    OpcodeEntry::new(0x5B, MMC, "Close track/session"),
    OpcodeEntry::new(0x5C, MMC, "Read buffer capacity"),
    OpcodeEntry::new(0x5D, MMC, "Send cue sheet"),
    OpcodeEntry::new(0x5E, ALL, "Persistent reserve in"),
    OpcodeEntry::new(0x5F, ALL, "Persistent reserve out"),
    OpcodeEntry::new(0x7E, ALL, "Extended cdb (XCBD)"),
    OpcodeEntry::new(0x7F, ALL, "Variable length cdb (more follows)"),
    OpcodeEntry::new(0x80, ALL, "Xdwrite extended(16)"),
    OpcodeEntry::new(0x80, TAPE, "Write filemarks(16)"),
    OpcodeEntry::new(0x81, ALL, "Rebuild(16)"),
    OpcodeEntry::new(0x81, TAPE, "Read reverse(16)"),
    OpcodeEntry::new(0x82, ALL, "Regenerate(16)"),
    OpcodeEntry::new(0x83, ALL, "Third party copy out"),
    OpcodeEntry::new(0x84, ALL, "Third party copy in"),
    OpcodeEntry::new(0x85, ALL, "ATA pass-through(16)"),
    OpcodeEntry::new(0x86, ALL, "Access control in"),
    OpcodeEntry::new(0x87, ALL, "Access control out"),
    OpcodeEntry::new(0x88, ALL, "Read(16)"),
    OpcodeEntry::new(0x89, ALL, "Compare and write"),
    OpcodeEntry::new(0x8A, ALL, "Write(16)"),
    OpcodeEntry::new(0x8B, ALL, "Orwrite(16)"),
    OpcodeEntry::new(0x8C, ALL, "Read attribute"),
    OpcodeEntry::new(0x8D, ALL, "Write attribute"),
    OpcodeEntry::new(0x8E, ALL, "Write and verify(16)"),
    OpcodeEntry::new(0x8F, ALL, "Verify(16)"),
    OpcodeEntry::new(0x90, ALL, "Pre-fetch(16)"),
    OpcodeEntry::new(0x91, ALL, "Synchronize cache(16)"),
    OpcodeEntry::new(0x91, TAPE, "Space(16)"),
    OpcodeEntry::new(0x92, ALL, "Lock unlock cache(16)"),
    OpcodeEntry::new(0x92, TAPE, "Locate(16)"),
    OpcodeEntry::new(0x93, ALL, "Write same(16)"),
    OpcodeEntry::new(0x93, TAPE, "Erase(16)"),
    OpcodeEntry::new(0x94, ZBC, "ZBC out"),
    OpcodeEntry::new(0x95, ZBC, "ZBC in"),
    OpcodeEntry::new(0x9A, ALL, "Write stream(16)"),
    OpcodeEntry::new(0x9B, ALL, "Read buffer(16)"),
    OpcodeEntry::new(0x9C, ALL, "Write atomic(16)"),
    OpcodeEntry::new(0x9D, ALL, "Service action bidirectional"),
    OpcodeEntry::new(0x9E, ALL, "Service action in(16)"),
    OpcodeEntry::new(0x9F, ALL, "Service action out(16)"),
    OpcodeEntry::new(0xA0, ALL, "Report luns"),
    OpcodeEntry::new(0xA1, ALL, "ATA pass-through(12)"),
    OpcodeEntry::new(0xA1, MMC, "Blank"),
    OpcodeEntry::new(0xA2, ALL, "Security protocol in"),
    OpcodeEntry::new(0xA3, ALL, "Maintenance in"),
    OpcodeEntry::new(0xA3, MMC, "Send key"),
    OpcodeEntry::new(0xA4, ALL, "Maintenance out"),
    OpcodeEntry::new(0xA4, MMC, "Report key"),
    OpcodeEntry::new(0xA5, ALL, "Move medium"),
    OpcodeEntry::new(0xA5, MMC, "Play audio(12)"),
    OpcodeEntry::new(0xA6, MCHANGER, "Exchange medium"),
    OpcodeEntry::new(0xA6, MMC, "Load/unload medium"),
    OpcodeEntry::new(0xA7, ALL, "Move medium attached"),
    OpcodeEntry::new(0xA7, MMC, "Set read ahead"),
    OpcodeEntry::new(0xA8, ALL, "Read(12)"),
    OpcodeEntry::new(0xA9, ALL, "Service action out(12)"),
    OpcodeEntry::new(0xAA, ALL, "Write(12)"),
    OpcodeEntry::new(0xAB, ALL, "Service action in(12)"),
    OpcodeEntry::new(0xAC, ALL, "Erase(12)"),
    OpcodeEntry::new(0xAC, MMC, "Get performance"),
    OpcodeEntry::new(0xAD, MMC, "Read DVD/BD structure"),
    OpcodeEntry::new(0xAE, ALL, "Write and verify(12)"),
    OpcodeEntry::new(0xAF, ALL, "Verify(12)"),
    OpcodeEntry::new(0xB0, ALL, "Search data high(12)"),
    OpcodeEntry::new(0xB1, ALL, "Search data equal(12)"),
    OpcodeEntry::new(0xB1, MCHANGER, "Open/close import/export element"),
    OpcodeEntry::new(0xB2, ALL, "Search data low(12)"),
    OpcodeEntry::new(0xB3, ALL, "Set limits(12)"),
    OpcodeEntry::new(0xB4, ALL, "Read element status attached"),
    OpcodeEntry::new(0xB5, ALL, "Security protocol out"),
    OpcodeEntry::new(0xB5, MCHANGER, "Request volume element address"),
    OpcodeEntry::new(0xB6, ALL, "Send volume tag"),
    OpcodeEntry::new(0xB6, MMC, "Set streaming"),
    OpcodeEntry::new(0xB7, ALL, "Read defect data(12)"),
    OpcodeEntry::new(0xB8, ALL, "Read element status"),
    OpcodeEntry::new(0xB9, MMC, "Read CD msf"),
    OpcodeEntry::new(0xBA, ALL, "Redundancy group in"),
    OpcodeEntry::new(0xBA, MMC, "Scan"),
    OpcodeEntry::new(0xBB, ALL, "Redundancy group out"),
    OpcodeEntry::new(0xBB, MMC, "Set CD speed"),
    OpcodeEntry::new(0xBC, ALL, "Spare in"),
    OpcodeEntry::new(0xBD, ALL, "Spare out"),
    OpcodeEntry::new(0xBD, MMC, "Mechanism status"),
    OpcodeEntry::new(0xBE, ALL, "Volume set in"),
    OpcodeEntry::new(0xBE, MMC, "Read CD"),
    OpcodeEntry::new(0xBF, ALL, "Volume set out"),
    OpcodeEntry::new(0xBF, MMC, "Send DVD/BD structure"),
];

static SANITIZE_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x01, ALL, "Sanitize, overwrite"),
    OpcodeEntry::new(0x02, ALL, "Sanitize, block erase"),
    OpcodeEntry::new(0x03, ALL, "Sanitize, cryptographic erase"),
    OpcodeEntry::new(0x1F, ALL, "Sanitize, exit failure mode"),
];

static READ_POSITION_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Read position (short form - block id)"),
    OpcodeEntry::new(0x01, ALL, "Read position (short form - vendor specific)"),
    OpcodeEntry::new(0x06, ALL, "Read position (long form)"),
    OpcodeEntry::new(0x08, ALL, "Read position (extended form)"),
];

static READ_BUFFER_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Read buffer, combined header and data [or multiple modes]"),
    OpcodeEntry::new(0x02, ALL, "Read buffer, data"),
    OpcodeEntry::new(0x03, ALL, "Read buffer, descriptor"),
    OpcodeEntry::new(0x0A, ALL, "Read buffer, read data from echo buffer"),
    OpcodeEntry::new(0x0B, ALL, "Read buffer, echo buffer descriptor"),
    OpcodeEntry::new(0x1A, ALL, "Read buffer, enable expander comms protocol and echo buffer"),
    OpcodeEntry::new(0x1C, ALL, "Read buffer, error history"),
];

static WRITE_BUFFER_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Write buffer, combined header and data [or multiple modes]"),
    OpcodeEntry::new(0x02, ALL, "Write buffer, data"),
    OpcodeEntry::new(0x04, ALL, "Write buffer, download microcode and activate"),
    OpcodeEntry::new(0x05, ALL, "Write buffer, download microcode, save, and activate"),
    OpcodeEntry::new(0x06, ALL, "Write buffer, download microcode with offsets and activate"),
    OpcodeEntry::new(
        0x07,
        ALL,
        "Write buffer, download microcode with offsets, save, and activate",
    ),
    OpcodeEntry::new(0x0A, ALL, "Write buffer, write data to echo buffer"),
    OpcodeEntry::new(
        0x0D,
        ALL,
        "Write buffer, download microcode with offsets, select activation events, save and defer activate",
    ),
    OpcodeEntry::new(
        0x0E,
        ALL,
        "Write buffer, download microcode with offsets, save and defer activate",
    ),
    OpcodeEntry::new(0x0F, ALL, "Write buffer, activate deferred microcode"),
    OpcodeEntry::new(0x1A, ALL, "Write buffer, enable expander comms protocol and echo buffer"),
    OpcodeEntry::new(0x1B, ALL, "Write buffer, disable expander comms protocol"),
    OpcodeEntry::new(0x1C, ALL, "Write buffer, download application client error history"),
];

static PERSISTENT_RESERVE_IN_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Persistent reserve in, read keys"),
    OpcodeEntry::new(0x01, ALL, "Persistent reserve in, read reservation"),
    OpcodeEntry::new(0x02, ALL, "Persistent reserve in, report capabilities"),
    OpcodeEntry::new(0x03, ALL, "Persistent reserve in, read full status"),
];

static PERSISTENT_RESERVE_OUT_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Persistent reserve out, register"),
    OpcodeEntry::new(0x01, ALL, "Persistent reserve out, reserve"),
    OpcodeEntry::new(0x02, ALL, "Persistent reserve out, release"),
    OpcodeEntry::new(0x03, ALL, "Persistent reserve out, clear"),
    OpcodeEntry::new(0x04, ALL, "Persistent reserve out, preempt"),
    OpcodeEntry::new(0x05, ALL, "Persistent reserve out, preempt and abort"),
    OpcodeEntry::new(
        0x06,
        ALL,
        "Persistent reserve out, register and ignore existing key",
    ),
    OpcodeEntry::new(0x07, ALL, "Persistent reserve out, register and move"),
    OpcodeEntry::new(0x08, ALL, "Persistent reserve out, replace lost reservation"),
];

static VARIABLE_LENGTH_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x0001, ALL, "Rebuild(32)"),
    OpcodeEntry::new(0x0002, ALL, "Regenerate(32)"),
    OpcodeEntry::new(0x0003, ALL, "Xdread(32)"),
    OpcodeEntry::new(0x0004, ALL, "Xdwrite(32)"),
    OpcodeEntry::new(0x0006, ALL, "Xpwrite(32)"),
    OpcodeEntry::new(0x0007, ALL, "Xdwriteread(32)"),
    OpcodeEntry::new(0x0009, ALL, "Read(32)"),
    OpcodeEntry::new(0x000A, ALL, "Verify(32)"),
    OpcodeEntry::new(0x000B, ALL, "Write(32)"),
    OpcodeEntry::new(0x000C, ALL, "Write and verify(32)"),
    OpcodeEntry::new(0x000D, ALL, "Write same(32)"),
    OpcodeEntry::new(0x000E, ALL, "Orwrite(32)"),
    OpcodeEntry::new(0x000F, ALL, "Atomic write(32)"),
    OpcodeEntry::new(0x0010, ALL, "Write stream(32)"),
    OpcodeEntry::new(0x0011, ALL, "Write scattered(32)"),
    OpcodeEntry::new(0x0012, ALL, "Get LBA status(32)"),
    OpcodeEntry::new(0x1800, ALL, "Receive credential"),
    OpcodeEntry::new(0x8801, ALL, "Format OSD"),
    OpcodeEntry::new(0x8802, ALL, "Create (osd)"),
    OpcodeEntry::new(0x8803, ALL, "List (osd)"),
    OpcodeEntry::new(0x8805, ALL, "Read (osd)"),
    OpcodeEntry::new(0x8806, ALL, "Write (osd)"),
    OpcodeEntry::new(0x8807, ALL, "Append (osd)"),
    OpcodeEntry::new(0x8808, ALL, "Flush (osd)"),
    OpcodeEntry::new(0x880A, ALL, "Remove (osd)"),
    OpcodeEntry::new(0x880B, ALL, "Create partition (osd)"),
    OpcodeEntry::new(0x880C, ALL, "Remove partition (osd)"),
    OpcodeEntry::new(0x880E, ALL, "Get attributes (osd)"),
    OpcodeEntry::new(0x880F, ALL, "Set attributes (osd)"),
    OpcodeEntry::new(0x8812, ALL, "Create and write (osd)"),
    OpcodeEntry::new(0x8815, ALL, "Create collection (osd)"),
    OpcodeEntry::new(0x8816, ALL, "Remove collection (osd)"),
    OpcodeEntry::new(0x8817, ALL, "List collection (osd)"),
    OpcodeEntry::new(0x8818, ALL, "Set key (osd)"),
    OpcodeEntry::new(0x8819, ALL, "Set master key (osd)"),
    OpcodeEntry::new(0x881A, ALL, "Flush collection (osd)"),
    OpcodeEntry::new(0x881B, ALL, "Flush partition (osd)"),
    OpcodeEntry::new(0x881C, ALL, "Flush OSD"),
    OpcodeEntry::new(0x8F7E, ALL, "Perform SCSI command (osd)"),
    OpcodeEntry::new(0x8F7F, ALL, "Perform task management function (osd)"),
];

static THIRD_PARTY_COPY_OUT_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Extended copy(LID1)"),
    OpcodeEntry::new(0x01, ALL, "Extended copy(LID4)"),
    OpcodeEntry::new(0x10, ALL, "Populate token"),
    OpcodeEntry::new(0x11, ALL, "Write using token"),
    OpcodeEntry::new(0x1C, ALL, "Copy operation abort"),
];

static THIRD_PARTY_COPY_IN_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Receive copy status(LID1)"),
    OpcodeEntry::new(0x01, ALL, "Receive copy data(LID1)"),
    OpcodeEntry::new(0x03, ALL, "Receive copy operating parameters"),
    OpcodeEntry::new(0x04, ALL, "Receive copy failure details(LID1)"),
    OpcodeEntry::new(0x05, ALL, "Receive copy status(LID4)"),
    OpcodeEntry::new(0x06, ALL, "Receive copy data(LID4)"),
    OpcodeEntry::new(0x07, ALL, "Receive ROD token information"),
    OpcodeEntry::new(0x08, ALL, "Report all ROD tokens"),
];

static READ_ATTRIBUTE_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Read attribute, attribute values"),
    OpcodeEntry::new(0x01, ALL, "Read attribute, attribute list"),
    OpcodeEntry::new(0x02, ALL, "Read attribute, logical volume list"),
    OpcodeEntry::new(0x03, ALL, "Read attribute, partition list"),
    OpcodeEntry::new(0x05, ALL, "Read attribute, supported attributes"),
];

static ZBC_OUT_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x01, ALL, "Close zone"),
    OpcodeEntry::new(0x02, ALL, "Finish zone"),
    OpcodeEntry::new(0x03, ALL, "Open zone"),
    OpcodeEntry::new(0x04, ALL, "Reset write pointer"),
    OpcodeEntry::new(0x10, ALL, "Sequentialize zone"),
];

static ZBC_IN_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x00, ALL, "Report zones"),
    OpcodeEntry::new(0x06, ALL, "Report realms"),
    OpcodeEntry::new(0x07, ALL, "Report zone domains"),
    OpcodeEntry::new(0x08, ALL, "Zone activate"),
    OpcodeEntry::new(0x09, ALL, "Zone query"),
];

static SERVICE_ACTION_IN_16_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x10, ALL, "Read capacity(16)"),
    OpcodeEntry::new(0x11, ALL, "Read long(16)"),
    OpcodeEntry::new(0x12, ALL, "Get LBA status(16)"),
    OpcodeEntry::new(0x13, ALL, "Report referrals"),
    OpcodeEntry::new(0x14, ALL, "Stream control"),
    OpcodeEntry::new(0x15, ALL, "Background control"),
    OpcodeEntry::new(0x16, ALL, "Get stream status"),
    OpcodeEntry::new(0x17, ALL, "Get physical element status"),
    OpcodeEntry::new(0x18, ALL, "Remove element and truncate"),
    OpcodeEntry::new(0x19, ALL, "Restore elements and rebuild"),
    OpcodeEntry::new(0x1A, ALL, "Remove element and modify zones"),
];

static SERVICE_ACTION_OUT_16_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x11, ALL, "Write long(16)"),
    OpcodeEntry::new(0x1F, ADC, "Notify data transfer device(16)"),
];

static MAINTENANCE_IN_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x05, ALL, "Report identifying information"),
    OpcodeEntry::new(0x0A, ALL, "Report target port groups"),
    OpcodeEntry::new(0x0B, ALL, "Report aliases"),
    OpcodeEntry::new(0x0C, ALL, "Report supported operation codes"),
    OpcodeEntry::new(0x0D, ALL, "Report supported task management functions"),
    OpcodeEntry::new(0x0E, ALL, "Report priority"),
    OpcodeEntry::new(0x0F, ALL, "Report timestamp"),
    OpcodeEntry::new(0x10, ALL, "Management protocol in"),
];

static MAINTENANCE_OUT_SA: &[OpcodeEntry] = &[
    OpcodeEntry::new(0x06, ALL, "Set identifying information"),
    OpcodeEntry::new(0x0A, ALL, "Set target port groups"),
    OpcodeEntry::new(0x0B, ALL, "Change aliases"),
    OpcodeEntry::new(0x0C, ALL, "Remove I_T nexus"),
    OpcodeEntry::new(0x0E, ALL, "Set priority"),
    OpcodeEntry::new(0x0F, ALL, "Set timestamp"),
    OpcodeEntry::new(0x10, ALL, "Management protocol out"),
];

static SERVICE_ACTION_IN_12_SA: &[OpcodeEntry] =
    &[OpcodeEntry::new(0x01, ALL, "Read media serial number")];

static SERVICE_ACTION_OUT_12_SA: &[OpcodeEntry] =
    &[OpcodeEntry::new(0x1F, ADC, "Notify data transfer device(12)")];

/// Operation codes whose CDB carries a service action, ascending by opcode.
/// A table is limited to certain device types only where the opcode means a
/// different command elsewhere (0x34 is PRE-FETCH on disks, READ POSITION on
/// tape).
pub(crate) static SERVICE_ACTION_TABLES: &[ServiceActionTable] = &[
    ServiceActionTable::new(0x34, TAPE, READ_POSITION_SA),
    ServiceActionTable::new(0x3B, ALL, WRITE_BUFFER_SA),
    ServiceActionTable::new(0x3C, ALL, READ_BUFFER_SA),
    ServiceActionTable::new(0x48, ALL, SANITIZE_SA),
    ServiceActionTable::new(0x5E, ALL, PERSISTENT_RESERVE_IN_SA),
    ServiceActionTable::new(0x5F, ALL, PERSISTENT_RESERVE_OUT_SA),
    ServiceActionTable::new(0x7F, ALL, VARIABLE_LENGTH_SA),
    ServiceActionTable::new(0x83, ALL, THIRD_PARTY_COPY_OUT_SA),
    ServiceActionTable::new(0x84, ALL, THIRD_PARTY_COPY_IN_SA),
    ServiceActionTable::new(0x8C, ALL, READ_ATTRIBUTE_SA),
    ServiceActionTable::new(0x94, ALL, ZBC_OUT_SA),
    ServiceActionTable::new(0x95, ALL, ZBC_IN_SA),
    ServiceActionTable::new(0x9B, ALL, READ_BUFFER_SA),
    ServiceActionTable::new(0x9E, ALL, SERVICE_ACTION_IN_16_SA),
    ServiceActionTable::new(0x9F, ALL, SERVICE_ACTION_OUT_16_SA),
    ServiceActionTable::new(0xA3, ALL, MAINTENANCE_IN_SA),
    ServiceActionTable::new(0xA4, ALL, MAINTENANCE_OUT_SA),
    ServiceActionTable::new(0xA9, ALL, SERVICE_ACTION_OUT_12_SA),
    ServiceActionTable::new(0xAB, ALL, SERVICE_ACTION_IN_12_SA),
];

/// Service-action names for one operation code.
#[derive(Debug, Clone, Copy)]
pub struct ServiceActionTable {
    pub opcode: u8,
    pub scope: DeviceScope,
    pub entries: &'static [OpcodeEntry],
}

impl ServiceActionTable {
    pub const fn new(opcode: u8, scope: DeviceScope, entries: &'static [OpcodeEntry]) -> Self {
        Self {
            opcode,
            scope,
            entries,
        }
    }
}
