// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Standard INQUIRY (6), used to learn the peripheral device type that
//! command names are resolved against.
//!
//! CDB layout (SPC):
//!   [0] = 0x12 (INQUIRY)
//!   [1] = EVPD (bit 0), 0 here
//!   [2] = page code, 0 here
//!   [3..5] = allocation length (BE)
//!   [5] = control

use anyhow::{Result, bail};
use serde::Serialize;

use crate::catalog::{PeripheralDeviceType, version_descriptor_name};

pub const INQUIRY_OPCODE: u8 = 0x12;
/// Enough for the fixed part plus the eight version descriptors.
pub const INQUIRY_ALLOCATION_LEN: u16 = 74;
pub const INQUIRY_MIN_LEN: usize = 36;

/// Fill a standard INQUIRY (EVPD=0) CDB.
#[inline]
pub fn fill_inquiry_standard(cdb: &mut [u8; 16], allocation_len: u16) {
    cdb.fill(0);
    cdb[0] = INQUIRY_OPCODE;
    cdb[3..5].copy_from_slice(&allocation_len.to_be_bytes());
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryStandard {
    pub peripheral_qualifier: u8, // bits 7..5 of byte0
    pub device_type: PeripheralDeviceType,
    pub version: u8,
    pub vendor_id: String,   // bytes 8..16
    pub product_id: String,  // bytes 16..32
    pub product_rev: String, // bytes 32..36
    /// Version descriptors at bytes 58..74, zero entries skipped.
    pub version_descriptors: Vec<u16>,
}

impl InquiryStandard {
    /// Standards the device claims, with names where known.
    pub fn claimed_standards(&self) -> Vec<String> {
        self.version_descriptors
            .iter()
            .map(|&v| match version_descriptor_name(v) {
                Some(name) => name.to_string(),
                None => format!("[0x{v:04x}]"),
            })
            .collect()
    }
}

/// Parse a standard INQUIRY response (minimum 36 bytes).
pub fn parse_inquiry_standard(buf: &[u8]) -> Result<InquiryStandard> {
    if buf.len() < INQUIRY_MIN_LEN {
        bail!("INQUIRY buffer too short: {}", buf.len());
    }
    let b0 = buf[0];

    let version_descriptors = buf
        .get(58..74.min(buf.len()))
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .filter(|&v| v != 0)
        .collect();

    Ok(InquiryStandard {
        peripheral_qualifier: (b0 >> 5) & 0x07,
        device_type: PeripheralDeviceType(b0 & 0x1F),
        version: buf[2],
        vendor_id: trim_ascii(&buf[8..16]),
        product_id: trim_ascii(&buf[16..32]),
        product_rev: trim_ascii(&buf[32..36]),
        version_descriptors,
    })
}

/// Space padded ASCII field; non-printable bytes become `?`.
fn trim_ascii(bytes: &[u8]) -> String {
    bytes
        .trim_ascii()
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { char::from(b) } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tape_drive_without_descriptors() {
        let mut b = [0u8; 36];
        b[0] = 0x01;
        b[2] = 0x06;
        b[4] = 31;
        b[8..16].copy_from_slice(b"IBM     ");
        b[16..32].copy_from_slice(b"ULT3580-TD8     ");
        b[32..36].copy_from_slice(b"Q3\x01 ");
        let s = parse_inquiry_standard(&b).expect("WTF");
        assert_eq!(s.device_type, PeripheralDeviceType(0x01));
        assert_eq!(s.peripheral_qualifier, 0);
        assert_eq!(s.vendor_id, "IBM");
        assert_eq!(s.product_id, "ULT3580-TD8");
        assert_eq!(s.product_rev, "Q3?");
        assert!(s.version_descriptors.is_empty());
        assert!(parse_inquiry_standard(&b[..35]).is_err());
    }

    #[test]
    fn version_descriptors() {
        let mut b = [0u8; 74];
        b[58..60].copy_from_slice(&0xFFC4u16.to_be_bytes());
        b[60..62].copy_from_slice(&0xABCDu16.to_be_bytes());
        let s = parse_inquiry_standard(&b).expect("WTF");
        assert_eq!(s.version_descriptors, vec![0xFFC4, 0xABCD]);
        assert_eq!(s.claimed_standards(), vec![
            "IEEE 1667-2018".to_string(),
            "[0xabcd]".to_string()
        ]);
    }

    #[test]
    fn cdb() {
        let mut cdb = [0xAAu8; 16];
        fill_inquiry_standard(&mut cdb, INQUIRY_ALLOCATION_LEN);
        assert_eq!(&cdb[..6], &[0x12, 0, 0, 0, 74, 0]);
    }
}
