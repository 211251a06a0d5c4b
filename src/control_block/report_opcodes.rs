// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT SUPPORTED OPERATION CODES (MAINTENANCE IN, service action 0x0C).
//!
//! CDB layout (SPC-6):
//!   [0]    = 0xA3 (MAINTENANCE IN)
//!   [1]    = 0x0C (service action)
//!   [2]    = RCTD (bit 7) | REPORTING OPTIONS (bits 2..0)
//!   [3]    = requested operation code
//!   [4..6] = requested service action (BE)
//!   [6..10]= allocation length (BE)
//!   [10]   = reserved
//!   [11]   = control

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const MAINTENANCE_IN_OPCODE: u8 = 0xA3;
pub const REPORT_SUPPORTED_OPCODES_SA: u8 = 0x0C;
/// Allocation length used when none is configured.
pub const DEFAULT_ALLOCATION_LEN: u32 = 8192;

const RCTD: u8 = 0x80;

/// REPORTING OPTIONS field. Configured as its 3-bit value.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReportingOptions {
    /// 000b: every supported command, requested opcode/SA ignored.
    AllCommands = 0,
    /// 001b: one command without service actions.
    Opcode = 1,
    /// 010b: one command identified by opcode and service action.
    OpcodeServiceAction = 2,
    /// 011b: one command, with or without service actions.
    OpcodeAnyServiceAction = 3,
}

impl ReportingOptions {
    /// Options implied by what the caller asked about.
    pub fn derive(opcode: Option<u8>, service_action: Option<u16>) -> Self {
        match (opcode, service_action) {
            (None, _) => ReportingOptions::AllCommands,
            (Some(_), None) => ReportingOptions::Opcode,
            (Some(_), Some(_)) => ReportingOptions::OpcodeServiceAction,
        }
    }

    #[inline]
    pub fn is_one_command(self) -> bool {
        self != ReportingOptions::AllCommands
    }

    /// Whether the requested service action field is sent to the device.
    #[inline]
    pub fn takes_service_action(self) -> bool {
        matches!(
            self,
            ReportingOptions::OpcodeServiceAction | ReportingOptions::OpcodeAnyServiceAction
        )
    }
}

impl From<ReportingOptions> for u8 {
    #[inline]
    fn from(o: ReportingOptions) -> u8 {
        o as u8
    }
}

impl TryFrom<u8> for ReportingOptions {
    type Error = anyhow::Error;

    fn try_from(v: u8) -> Result<Self> {
        use ReportingOptions::*;
        Ok(match v {
            0 => AllCommands,
            1 => Opcode,
            2 => OpcodeServiceAction,
            3 => OpcodeAnyServiceAction,
            _ => bail!("invalid reporting options: {v}"),
        })
    }
}

/// Fill a REPORT SUPPORTED OPERATION CODES CDB (12 bytes used).
#[inline]
pub fn fill_report_supported_opcodes(
    cdb: &mut [u8; 16],
    rctd: bool,
    options: ReportingOptions,
    opcode: u8,
    service_action: u16,
    allocation_len: u32,
) {
    cdb.fill(0);
    cdb[0] = MAINTENANCE_IN_OPCODE;
    cdb[1] = REPORT_SUPPORTED_OPCODES_SA;
    cdb[2] = u8::from(options) & 0x07;
    if rctd {
        cdb[2] |= RCTD;
    }
    cdb[3] = opcode;
    cdb[4..6].copy_from_slice(&service_action.to_be_bytes());
    cdb[6..10].copy_from_slice(&allocation_len.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn list_all_with_timeouts() {
        let mut cdb = [0xFFu8; 16];
        fill_report_supported_opcodes(
            &mut cdb,
            true,
            ReportingOptions::AllCommands,
            0,
            0,
            DEFAULT_ALLOCATION_LEN,
        );
        assert_eq!(cdb, hex!("A30C8000 00000000 20000000 00000000"));
    }

    #[test]
    fn one_command_with_service_action() {
        let mut cdb = [0u8; 16];
        let opts = ReportingOptions::derive(Some(0x9E), Some(0x10));
        fill_report_supported_opcodes(&mut cdb, false, opts, 0x9E, 0x10, 512);
        assert_eq!(&cdb[..12], &hex!("A30C029E 00100000 02000000"));
    }

    #[test]
    fn derive() {
        assert_eq!(ReportingOptions::derive(None, Some(1)), ReportingOptions::AllCommands);
        assert_eq!(ReportingOptions::derive(Some(0x12), None), ReportingOptions::Opcode);
        assert!(ReportingOptions::try_from(4).is_err());
        assert!(!ReportingOptions::AllCommands.is_one_command());
        assert!(ReportingOptions::OpcodeAnyServiceAction.is_one_command());
    }

    #[test]
    fn any_service_action_bits() {
        let mut cdb = [0u8; 16];
        fill_report_supported_opcodes(
            &mut cdb,
            true,
            ReportingOptions::OpcodeAnyServiceAction,
            0x5E,
            0,
            DEFAULT_ALLOCATION_LEN,
        );
        assert_eq!(&cdb[..12], &hex!("A30C835E 00000000 20000000"));
        assert!(!ReportingOptions::Opcode.takes_service_action());
    }
}
