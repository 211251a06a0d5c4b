// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Peripheral device types (INQUIRY byte 0, bits 4..0) and the device-type
//! sets the opcode catalog is conditioned on.

use serde::Serialize;

/// Highest peripheral device type value (5-bit field).
pub const PDT_MAX: u8 = 0x1F;

bitflags::bitflags! {
    /// Set of peripheral device types, one bit per PDT value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceTypes: u32 {
        const DISK      = 1 << 0x00;
        const TAPE      = 1 << 0x01;
        const PRINTER   = 1 << 0x02;
        const PROCESSOR = 1 << 0x03;
        const WO        = 1 << 0x04;
        const MMC       = 1 << 0x05;
        const SCANNER   = 1 << 0x06;
        const OPTICAL   = 1 << 0x07;
        const MCHANGER  = 1 << 0x08;
        const COMMS     = 1 << 0x09;
        const SAC       = 1 << 0x0C;
        const SES       = 1 << 0x0D;
        const RBC       = 1 << 0x0E;
        const OCRW      = 1 << 0x0F;
        const BCC       = 1 << 0x10;
        const OSD       = 1 << 0x11;
        const ADC       = 1 << 0x12;
        const SMD       = 1 << 0x13;
        const ZBC       = 1 << 0x14;
        const WLUN      = 1 << 0x1E;
        const NO_LU     = 1 << 0x1F;

        /// Host managed zoned devices share most of the disk command set.
        const DISK_ZBC  = Self::DISK.bits() | Self::ZBC.bits();
    }
}

impl DeviceTypes {
    /// Single-member set for a raw PDT value (upper bits ignored).
    #[inline]
    pub const fn from_pdt(pdt: u8) -> Self {
        Self::from_bits_retain(1 << (pdt & PDT_MAX))
    }
}

/// Which device types a catalog entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceScope {
    /// Wildcard: the entry is the generic name for every device type.
    All,
    Only(DeviceTypes),
}

impl DeviceScope {
    #[inline]
    pub fn is_wildcard(self) -> bool {
        matches!(self, DeviceScope::All)
    }

    /// True only for a specific (non-wildcard) match on `pdt`.
    #[inline]
    pub fn contains_exact(self, pdt: u8) -> bool {
        match self {
            DeviceScope::All => false,
            DeviceScope::Only(set) => set.intersects(DeviceTypes::from_pdt(pdt)),
        }
    }

    /// True when an entry with this scope may be used for `pdt`
    /// (wildcards apply everywhere).
    #[inline]
    pub fn admits(self, pdt: Option<u8>) -> bool {
        match (self, pdt) {
            (DeviceScope::All, _) => true,
            (DeviceScope::Only(_), None) => false,
            (scope, Some(p)) => scope.contains_exact(p) || scope.contains_exact(decay_pdt(p)),
        }
    }
}

/// Map derived device types onto the base type whose command set they
/// extend: ZBC and RBC onto disk, ADC onto tape.
#[inline]
pub fn decay_pdt(pdt: u8) -> u8 {
    match pdt & PDT_MAX {
        0x0E | 0x14 => 0x00,
        0x12 => 0x01,
        other => other,
    }
}

/// Peripheral device type as reported in INQUIRY data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeripheralDeviceType(pub u8);

impl PeripheralDeviceType {
    pub fn name(self) -> &'static str {
        match self.0 & PDT_MAX {
            0x00 => "disk",
            0x01 => "tape",
            0x02 => "printer",
            0x03 => "processor",
            0x04 => "write once optical disk",
            0x05 => "cd/dvd",
            0x06 => "scanner",
            0x07 => "optical memory device",
            0x08 => "medium changer",
            0x09 => "communications",
            0x0A | 0x0B => "graphics",
            0x0C => "storage array controller",
            0x0D => "enclosure services device",
            0x0E => "simplified direct access device",
            0x0F => "optical card reader/writer device",
            0x10 => "bridge controller commands",
            0x11 => "object based storage",
            0x12 => "automation/driver interface",
            0x13 => "security manager device",
            0x14 => "host managed zoned block",
            0x1E => "well known logical unit",
            0x1F => "unknown or no device type",
            _ => "reserved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_matching() {
        let disk_zbc = DeviceScope::Only(DeviceTypes::DISK_ZBC);
        assert!(disk_zbc.contains_exact(0x00));
        assert!(disk_zbc.contains_exact(0x14));
        assert!(!disk_zbc.contains_exact(0x01));
        assert!(!DeviceScope::All.contains_exact(0x00));
        assert!(DeviceScope::All.admits(None));
        assert!(!disk_zbc.admits(None));
    }

    #[test]
    fn decayed_types_reach_base_entries() {
        let disk = DeviceScope::Only(DeviceTypes::DISK);
        assert!(disk.admits(Some(0x0E)));
        let tape = DeviceScope::Only(DeviceTypes::TAPE);
        assert!(tape.admits(Some(0x12)));
        assert!(!tape.admits(Some(0x05)));
    }

    #[test]
    fn names() {
        assert_eq!(PeripheralDeviceType(0x01).name(), "tape");
        assert_eq!(PeripheralDeviceType(0x15).name(), "reserved");
        assert_eq!(PeripheralDeviceType(0x1F).name(), "unknown or no device type");
    }
}
