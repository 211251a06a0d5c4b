// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Command timeouts descriptor (SPC-6 §6.35.4), shared by both RSOC report
//! formats.
//!
//! ```text
//!  0..2   descriptor length (0x000A)
//!  2      reserved
//!  3      command specific
//!  4..8   nominal command processing timeout (seconds)
//!  8..12  recommended command timeout (seconds)
//! ```

use serde::Serialize;
use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    byteorder::{BigEndian, U16, U32},
};

use super::error::{Diagnostic, note};

/// Size of the descriptor on the wire.
pub const TIMEOUT_DESCRIPTOR_LEN: usize = 12;
/// Value of the descriptor length field (bytes following it).
pub const TIMEOUT_DESCRIPTOR_LENGTH: u16 = 10;

#[repr(C)]
#[derive(FromBytes, KnownLayout, Immutable, Debug)]
pub struct RawTimeoutDescriptor {
    pub descriptor_length: U16<BigEndian>,
    reserved: u8,
    pub command_specific: u8,
    pub nominal: U32<BigEndian>,
    pub recommended: U32<BigEndian>,
}

/// Timeouts in seconds; zero means "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandTimeouts {
    pub command_specific: u8,
    pub nominal: u32,
    pub recommended: u32,
}

impl From<&RawTimeoutDescriptor> for CommandTimeouts {
    fn from(raw: &RawTimeoutDescriptor) -> Self {
        Self {
            command_specific: raw.command_specific,
            nominal: raw.nominal.get(),
            recommended: raw.recommended.get(),
        }
    }
}

/// Decode the descriptor at the start of `buf`. A short buffer or a wrong
/// length field yields `None`; the latter is also noted as a diagnostic.
pub(crate) fn decode_timeouts(
    buf: &[u8],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<CommandTimeouts> {
    let (raw, _) = RawTimeoutDescriptor::ref_from_prefix(buf).ok()?;
    let declared_length = raw.descriptor_length.get();
    if declared_length != TIMEOUT_DESCRIPTOR_LENGTH {
        note(
            diagnostics,
            Diagnostic::MalformedTimeoutDescriptor { declared_length },
        );
        return None;
    }
    Some(raw.into())
}
