// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT SUPPORTED OPERATION CODES, reporting options 001b..011b: details
//! of one command.
//!
//! ```text
//!  0        bit0 RWCDLP
//!  1        bit7 CTDP | bits6..5 MLU | bits4..3 CDLP | bits2..0 SUPPORT
//!  2..4     CDB size (BE u16)
//!  4..4+n   CDB usage data
//!  4+n..    command timeouts descriptor (only when CTDP = 1)
//! ```

use core::fmt;

use serde::Serialize;
use tracing::debug;

use super::{
    error::{DecodeError, Decoded, Diagnostic, note},
    timeouts::{CommandTimeouts, TIMEOUT_DESCRIPTOR_LEN, decode_timeouts},
};
use crate::lookup::resolve_name;

pub const ONE_COMMAND_HEADER_LEN: usize = 4;

/// SUPPORT field of a one-command report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SupportCode {
    /// 000b: data about the command is not currently available.
    NotCurrentlyAvailable,
    /// 001b
    NotSupported,
    /// 011b: supported in conformance with a SCSI standard.
    Standard,
    /// 101b: supported in a vendor specific manner.
    VendorSpecific,
    Reserved(u8),
}

impl From<u8> for SupportCode {
    fn from(v: u8) -> Self {
        match v & 0x07 {
            0 => SupportCode::NotCurrentlyAvailable,
            1 => SupportCode::NotSupported,
            3 => SupportCode::Standard,
            5 => SupportCode::VendorSpecific,
            other => SupportCode::Reserved(other),
        }
    }
}

impl SupportCode {
    pub fn value(self) -> u8 {
        match self {
            SupportCode::NotCurrentlyAvailable => 0,
            SupportCode::NotSupported => 1,
            SupportCode::Standard => 3,
            SupportCode::VendorSpecific => 5,
            SupportCode::Reserved(v) => v,
        }
    }

    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(self, SupportCode::Standard | SupportCode::VendorSpecific)
    }

    pub fn describe(self) -> String {
        match self {
            SupportCode::NotCurrentlyAvailable => "not currently available".into(),
            SupportCode::NotSupported => "NOT supported".into(),
            SupportCode::Standard => "supported [conforming to SCSI standard]".into(),
            SupportCode::VendorSpecific => "supported [in a vendor specific manner]".into(),
            SupportCode::Reserved(v) => format!("support reserved [0x{v:x}]"),
        }
    }
}

impl fmt::Display for SupportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Which command a one-command report was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OneCommandRequest {
    pub opcode: u8,
    pub service_action: Option<u16>,
}

impl OneCommandRequest {
    pub fn new(opcode: u8, service_action: Option<u16>) -> Self {
        Self {
            opcode,
            service_action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneCommandDescriptor {
    pub operation_code: u8,
    pub service_action: Option<u16>,
    pub name: String,
    pub support: SupportCode,
    pub rwcdlp: bool,
    pub cdlp: u8,
    pub mlu: u8,
    pub ctdp: bool,
    pub cdb_size: u16,
    /// Bit mask of the CDB bits the device honours; byte 0 is the opcode.
    pub cdb_usage: Vec<u8>,
    pub timeouts: Option<CommandTimeouts>,
}

impl OneCommandDescriptor {
    pub fn duration_limit(&self) -> &'static str {
        duration_limit_description(self.rwcdlp, self.cdlp)
    }

    pub fn multiple_logical_units(&self) -> &'static str {
        mlu_description(self.mlu)
    }
}

/// Decode a one-command report. Any field that runs past the received data
/// fails the whole decode.
pub fn decode_one_command(
    buf: &[u8],
    actual_len: usize,
    request: OneCommandRequest,
    pdt: Option<u8>,
) -> Result<Decoded<OneCommandDescriptor>, DecodeError> {
    let data = &buf[..actual_len.min(buf.len())];
    let Some((header, rest)) = data.split_first_chunk::<ONE_COMMAND_HEADER_LEN>() else {
        return Err(DecodeError::BufferTooShort {
            what: "one command header",
            needed: ONE_COMMAND_HEADER_LEN,
            actual: data.len(),
        });
    };
    let mut diagnostics = Vec::new();

    let rwcdlp = header[0] & 0x01 != 0;
    let support = SupportCode::from(header[1]);
    let cdlp = (header[1] >> 3) & 0x03;
    let mlu = (header[1] >> 5) & 0x03;
    let ctdp = header[1] & 0x80 != 0;
    let cdb_size = u16::from_be_bytes([header[2], header[3]]);

    if let SupportCode::Reserved(code) = support {
        note(&mut diagnostics, Diagnostic::ReservedSupportCode { code });
    }

    let usage_len = usize::from(cdb_size);
    let Some((usage, after)) = rest.split_at_checked(usage_len) else {
        return Err(DecodeError::BufferTooShort {
            what: "CDB usage data",
            needed: ONE_COMMAND_HEADER_LEN + usage_len,
            actual: data.len(),
        });
    };

    let timeouts = if ctdp {
        if after.len() < TIMEOUT_DESCRIPTOR_LEN {
            return Err(DecodeError::BufferTooShort {
                what: "command timeouts descriptor",
                needed: ONE_COMMAND_HEADER_LEN + usage_len + TIMEOUT_DESCRIPTOR_LEN,
                actual: data.len(),
            });
        }
        decode_timeouts(after, &mut diagnostics)
    } else {
        None
    };

    let name = resolve_name(
        request.opcode,
        request.service_action.unwrap_or(0),
        request.service_action.is_some(),
        pdt,
    );
    debug!(
        opcode = request.opcode,
        sa = ?request.service_action,
        support = support.value(),
        cdb_size,
        "decoded one command report"
    );

    Ok(Decoded::new(
        OneCommandDescriptor {
            operation_code: request.opcode,
            service_action: request.service_action,
            name,
            support,
            rwcdlp,
            cdlp,
            mlu,
            ctdp,
            cdb_size,
            cdb_usage: usage.to_vec(),
            timeouts,
        },
        diagnostics,
    ))
}

/// Text for the RWCDLP / CDLP pair (which command duration limits mode page
/// applies).
pub fn duration_limit_description(rwcdlp: bool, cdlp: u8) -> &'static str {
    match (cdlp & 0x03, rwcdlp) {
        (0, false) => "No command duration limit mode page",
        (0, true) => "Reserved [RWCDLP=1, CDLP=0]",
        (1, false) => "Command duration limit A mode page",
        (1, true) => "Command duration limit T2A mode page",
        (2, false) => "Command duration limit B mode page",
        (2, true) => "Command duration limit T2B mode page",
        _ => "reserved [CDLP=3]",
    }
}

/// Text for the MLU (multiple logical units) field.
pub fn mlu_description(mlu: u8) -> &'static str {
    match mlu & 0x03 {
        0 => "not reported",
        1 => "affects only this logical unit",
        2 => "affects more than 1, but not all LUs in this target",
        _ => "affects all LUs in this target",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_codes() {
        assert_eq!(SupportCode::from(0x03), SupportCode::Standard);
        assert_eq!(SupportCode::from(0xFD), SupportCode::VendorSpecific);
        assert_eq!(SupportCode::from(0x02), SupportCode::Reserved(2));
        assert_eq!(SupportCode::Reserved(6).describe(), "support reserved [0x6]");
        assert!(SupportCode::Standard.is_supported());
        assert!(!SupportCode::NotSupported.is_supported());
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            duration_limit_description(true, 2),
            "Command duration limit T2B mode page"
        );
        assert_eq!(duration_limit_description(false, 3), "reserved [CDLP=3]");
        assert_eq!(mlu_description(1), "affects only this logical unit");
    }
}
