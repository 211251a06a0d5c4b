// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT SUPPORTED OPERATION CODES, reporting options 000b: the list of all
//! supported commands.
//!
//! ```text
//! header   0..4   command data length (BE u32, bytes that follow)
//! record   0      operation code
//!          1      reserved
//!          2..4   service action (BE u16)
//!          4      reserved
//!          5      bit6 RWCDLP | bits5..4 MLU | bits3..2 CDLP | bit1 CTDP | bit0 SERVACTV
//!          6..8   CDB length (BE u16)
//!          8..20  command timeouts descriptor (only when CTDP = 1)
//! ```

use serde::Serialize;
use tracing::{debug, trace};
use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    byteorder::{BigEndian, U16},
};

use super::{
    error::{DecodeError, Decoded, Diagnostic, note},
    timeouts::{CommandTimeouts, TIMEOUT_DESCRIPTOR_LEN, decode_timeouts},
};
use crate::lookup::resolve_name;

/// Length of the command data length header.
pub const ALL_COMMANDS_HEADER_LEN: usize = 4;
/// Record size without a timeouts descriptor.
pub const COMMAND_DESCRIPTOR_LEN: usize = 8;
/// Record size with a timeouts descriptor.
pub const COMMAND_DESCRIPTOR_WITH_TIMEOUTS_LEN: usize =
    COMMAND_DESCRIPTOR_LEN + TIMEOUT_DESCRIPTOR_LEN;

bitflags::bitflags! {
    /// Byte 5 of an all-commands record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CommandFlags: u8 {
        const SERVACTV = 0b0000_0001;
        const CTDP     = 0b0000_0010;
        const CDLP     = 0b0000_1100;
        const MLU      = 0b0011_0000;
        const RWCDLP   = 0b0100_0000;
    }
}

impl CommandFlags {
    #[inline]
    pub fn cdlp(self) -> u8 {
        (self.bits() & Self::CDLP.bits()) >> 2
    }

    #[inline]
    pub fn mlu(self) -> u8 {
        (self.bits() & Self::MLU.bits()) >> 4
    }
}

#[repr(C)]
#[derive(FromBytes, KnownLayout, Immutable, Debug)]
pub struct RawCommandDescriptor {
    pub operation_code: u8,
    reserved1: u8,
    pub service_action: U16<BigEndian>,
    reserved4: u8,
    pub flags: u8,
    pub cdb_length: U16<BigEndian>,
}

impl RawCommandDescriptor {
    #[inline]
    pub fn flags(&self) -> CommandFlags {
        CommandFlags::from_bits_retain(self.flags)
    }

    /// Bytes this record occupies, timeouts descriptor included.
    #[inline]
    pub fn record_len(&self) -> usize {
        if self.flags().contains(CommandFlags::CTDP) {
            COMMAND_DESCRIPTOR_WITH_TIMEOUTS_LEN
        } else {
            COMMAND_DESCRIPTOR_LEN
        }
    }
}

/// One entry of the all-commands list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub operation_code: u8,
    pub service_action_valid: bool,
    pub service_action: u16,
    pub rwcdlp: bool,
    pub cdlp: u8,
    pub mlu: u8,
    pub ctdp: bool,
    pub cdb_size: u16,
    pub timeouts: Option<CommandTimeouts>,
    /// Name resolved for the device type given at decode time.
    pub name: String,
}

impl CommandDescriptor {
    fn from_raw(
        raw: &RawCommandDescriptor,
        timeouts: Option<CommandTimeouts>,
        pdt: Option<u8>,
    ) -> Self {
        let flags = raw.flags();
        let service_action_valid = flags.contains(CommandFlags::SERVACTV);
        let service_action = raw.service_action.get();
        Self {
            operation_code: raw.operation_code,
            service_action_valid,
            service_action,
            rwcdlp: flags.contains(CommandFlags::RWCDLP),
            cdlp: flags.cdlp(),
            mlu: flags.mlu(),
            ctdp: flags.contains(CommandFlags::CTDP),
            cdb_size: raw.cdb_length.get(),
            timeouts,
            name: resolve_name(
                raw.operation_code,
                service_action,
                service_action_valid,
                pdt,
            ),
        }
    }

    /// `(opcode, service action)` with the service action zeroed when it is
    /// not valid.
    #[inline]
    pub fn numeric_key(&self) -> (u8, u16) {
        let sa = if self.service_action_valid {
            self.service_action
        } else {
            0
        };
        (self.operation_code, sa)
    }

    /// Name for another device type than the one used at decode time.
    pub fn name_for(&self, pdt: Option<u8>) -> String {
        resolve_name(
            self.operation_code,
            self.service_action,
            self.service_action_valid,
            pdt,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllCommands {
    /// Command data length as sent by the device.
    pub declared_length: u32,
    pub descriptors: Vec<CommandDescriptor>,
}

/// Decode an all-commands report. `actual_len` is how many bytes of `buf`
/// the device actually returned.
///
/// Only a missing header is an error. A declared length beyond the received
/// data is clamped to whole 8-byte records, and a record that does not fit
/// ends the list; both are reported as diagnostics.
pub fn decode_all_commands(
    buf: &[u8],
    actual_len: usize,
    pdt: Option<u8>,
) -> Result<Decoded<AllCommands>, DecodeError> {
    let data = &buf[..actual_len.min(buf.len())];
    let Some((header, payload)) = data.split_first_chunk::<ALL_COMMANDS_HEADER_LEN>() else {
        return Err(DecodeError::BufferTooShort {
            what: "command data length",
            needed: ALL_COMMANDS_HEADER_LEN,
            actual: data.len(),
        });
    };
    let declared = u32::from_be_bytes(*header);
    let mut diagnostics = Vec::new();

    let available = payload.len();
    let used = if declared as usize > available {
        let used = (available / COMMAND_DESCRIPTOR_LEN) * COMMAND_DESCRIPTOR_LEN;
        note(
            &mut diagnostics,
            Diagnostic::Truncated {
                declared,
                available,
                used,
            },
        );
        used
    } else {
        declared as usize
    };
    let body = &payload[..used];

    let mut descriptors = Vec::with_capacity(used / COMMAND_DESCRIPTOR_LEN);
    let mut off = 0usize;
    while off < body.len() {
        let rest = &body[off..];
        let Ok((raw, _)) = RawCommandDescriptor::ref_from_prefix(rest) else {
            note(
                &mut diagnostics,
                Diagnostic::PartialRecord {
                    offset: ALL_COMMANDS_HEADER_LEN + off,
                    needed: COMMAND_DESCRIPTOR_LEN,
                    available: rest.len(),
                },
            );
            break;
        };
        let record_len = raw.record_len();
        if rest.len() < record_len {
            note(
                &mut diagnostics,
                Diagnostic::PartialRecord {
                    offset: ALL_COMMANDS_HEADER_LEN + off,
                    needed: record_len,
                    available: rest.len(),
                },
            );
            break;
        }

        let timeouts = if record_len == COMMAND_DESCRIPTOR_WITH_TIMEOUTS_LEN {
            decode_timeouts(
                &rest[COMMAND_DESCRIPTOR_LEN..record_len],
                &mut diagnostics,
            )
        } else {
            None
        };
        let d = CommandDescriptor::from_raw(raw, timeouts, pdt);
        trace!(
            opcode = d.operation_code,
            sa = d.service_action,
            ctdp = d.ctdp,
            "command descriptor"
        );
        descriptors.push(d);
        off += record_len;
    }

    debug!(
        declared,
        count = descriptors.len(),
        diagnostics = diagnostics.len(),
        "decoded supported operation codes"
    );

    Ok(Decoded::new(
        AllCommands {
            declared_length: declared,
            descriptors,
        },
        diagnostics,
    ))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn flags_fields() {
        let f = CommandFlags::from_bits_retain(0b0110_1011);
        assert!(f.contains(CommandFlags::SERVACTV | CommandFlags::CTDP | CommandFlags::RWCDLP));
        assert_eq!(f.cdlp(), 2);
        assert_eq!(f.mlu(), 2);
    }

    #[test]
    fn header_only() {
        let out = decode_all_commands(&hex!("00000000"), 4, None).expect("decode");
        assert!(out.value.descriptors.is_empty());
        assert!(out.is_clean());
    }

    #[test]
    fn missing_header() {
        let err = decode_all_commands(&[0, 0], 2, None).expect_err("short");
        assert_eq!(err, DecodeError::BufferTooShort {
            what: "command data length",
            needed: 4,
            actual: 2
        });
    }

    #[test]
    fn actual_len_limits_buffer() {
        // allocation buffer larger than what the device returned
        let mut buf = [0u8; 64];
        buf[..12].copy_from_slice(&hex!("00000010 12000000 00000006"));
        let out = decode_all_commands(&buf, 12, None).expect("decode");
        assert_eq!(out.value.descriptors.len(), 1);
        assert_eq!(out.diagnostics, vec![Diagnostic::Truncated {
            declared: 16,
            available: 8,
            used: 8
        }]);
    }
}
