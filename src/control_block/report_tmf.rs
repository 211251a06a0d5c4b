// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT SUPPORTED TASK MANAGEMENT FUNCTIONS (MAINTENANCE IN, service
//! action 0x0D).
//!
//! CDB layout (SPC-6):
//!   [0]    = 0xA3
//!   [1]    = 0x0D
//!   [2]    = REPD (bit 7)
//!   [6..10]= allocation length (BE)
//!   [11]   = control

use super::report_opcodes::MAINTENANCE_IN_OPCODE;
use crate::models::task_management::{TMF_BASIC_LEN, TMF_EXTENDED_LEN};

pub const REPORT_SUPPORTED_TMF_SA: u8 = 0x0D;

/// Allocation length matching the requested data format.
#[inline]
pub fn tmf_allocation_len(repd: bool) -> u32 {
    if repd {
        TMF_EXTENDED_LEN as u32
    } else {
        TMF_BASIC_LEN as u32
    }
}

#[inline]
pub fn fill_report_supported_tmf(cdb: &mut [u8; 16], repd: bool, allocation_len: u32) {
    cdb.fill(0);
    cdb[0] = MAINTENANCE_IN_OPCODE;
    cdb[1] = REPORT_SUPPORTED_TMF_SA;
    if repd {
        cdb[2] = 0x80;
    }
    cdb[6..10].copy_from_slice(&allocation_len.to_be_bytes());
}
