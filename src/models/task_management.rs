// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT SUPPORTED TASK MANAGEMENT FUNCTIONS parameter data.
//!
//! Basic format is 4 bytes; with REPD set in the CDB the device returns 16
//! bytes and byte 3 (additional data length) is 0x0C.
//!
//! ```text
//!  0      ATS ATSS CACAS CTSS LURS QTS TRS WS
//!  1      . . . . . QAES QTSS ITNRS
//!  3      additional data length
//!  4      bit0 TMFTMOV
//!  6      ATTS ATSTS CACATS CTSTS LURTS QTTS . .
//!  7      . . . . . QAETS QTSTS ITNRTS
//!  8..12  long timeout (100 ms units)
//! 12..16  short timeout (100 ms units)
//! ```

use serde::Serialize;
use tracing::debug;

use super::error::DecodeError;

pub const TMF_BASIC_LEN: usize = 4;
pub const TMF_EXTENDED_LEN: usize = 16;
const TMF_EXTENDED_ADDITIONAL: u8 = 0x0C;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TmfSupport0: u8 {
        const ATS   = 0x80;
        const ATSS  = 0x40;
        const CACAS = 0x20;
        const CTSS  = 0x10;
        const LURS  = 0x08;
        const QTS   = 0x04;
        const TRS   = 0x02;
        const WS    = 0x01;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TmfSupport1: u8 {
        const QAES  = 0x04;
        const QTSS  = 0x02;
        const ITNRS = 0x01;
    }

    /// Byte 6 of the extended block: timeout selectors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TmfTimeoutSel6: u8 {
        const ATTS   = 0x80;
        const ATSTS  = 0x40;
        const CACATS = 0x20;
        const CTSTS  = 0x10;
        const LURTS  = 0x08;
        const QTTS   = 0x04;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TmfTimeoutSel7: u8 {
        const QAETS  = 0x04;
        const QTSTS  = 0x02;
        const ITNRTS = 0x01;
    }
}

/// Supported task management functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskManagementReport {
    pub abort_task: bool,
    pub abort_task_set: bool,
    pub clear_aca: bool,
    pub clear_task_set: bool,
    pub logical_unit_reset: bool,
    pub query_task: bool,
    /// Obsolete.
    pub target_reset: bool,
    /// Obsolete.
    pub wakeup: bool,
    pub query_async_event: bool,
    pub query_task_set: bool,
    pub it_nexus_reset: bool,
    pub extended: Option<TmfExtended>,
}

/// Per-function timeout selectors: when set the function uses the long
/// timeout, otherwise the short one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TmfExtended {
    /// TMFTMOV: the timeout fields below are valid.
    pub timeouts_valid: bool,
    pub abort_task_long: bool,
    pub abort_task_set_long: bool,
    pub clear_aca_long: bool,
    pub clear_task_set_long: bool,
    pub logical_unit_reset_long: bool,
    pub query_task_long: bool,
    pub query_async_event_long: bool,
    pub query_task_set_long: bool,
    pub it_nexus_reset_long: bool,
    /// 100 ms units.
    pub long_timeout: u32,
    /// 100 ms units.
    pub short_timeout: u32,
}

impl TmfExtended {
    #[inline]
    pub fn long_timeout_ms(&self) -> u64 {
        u64::from(self.long_timeout) * 100
    }

    #[inline]
    pub fn short_timeout_ms(&self) -> u64 {
        u64::from(self.short_timeout) * 100
    }
}

impl TaskManagementReport {
    /// Names of the supported functions in wire order.
    pub fn supported_names(&self) -> Vec<&'static str> {
        [
            (self.abort_task, "Abort task"),
            (self.abort_task_set, "Abort task set"),
            (self.clear_aca, "Clear ACA"),
            (self.clear_task_set, "Clear task set"),
            (self.logical_unit_reset, "Logical unit reset"),
            (self.query_task, "Query task"),
            (self.target_reset, "Target reset (obsolete)"),
            (self.wakeup, "Wakeup (obsolete)"),
            (self.query_async_event, "Query asynchronous event"),
            (self.query_task_set, "Query task set"),
            (self.it_nexus_reset, "I_T nexus reset"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Decode task management data; `extended` is whether REPD was set.
pub fn decode_tmf(
    buf: &[u8],
    actual_len: usize,
    extended: bool,
) -> Result<TaskManagementReport, DecodeError> {
    let data = &buf[..actual_len.min(buf.len())];
    let Some(basic) = data.first_chunk::<TMF_BASIC_LEN>() else {
        return Err(DecodeError::BufferTooShort {
            what: "task management data",
            needed: TMF_BASIC_LEN,
            actual: data.len(),
        });
    };

    let b0 = TmfSupport0::from_bits_retain(basic[0]);
    let b1 = TmfSupport1::from_bits_retain(basic[1]);
    let mut report = TaskManagementReport {
        abort_task: b0.contains(TmfSupport0::ATS),
        abort_task_set: b0.contains(TmfSupport0::ATSS),
        clear_aca: b0.contains(TmfSupport0::CACAS),
        clear_task_set: b0.contains(TmfSupport0::CTSS),
        logical_unit_reset: b0.contains(TmfSupport0::LURS),
        query_task: b0.contains(TmfSupport0::QTS),
        target_reset: b0.contains(TmfSupport0::TRS),
        wakeup: b0.contains(TmfSupport0::WS),
        query_async_event: b1.contains(TmfSupport1::QAES),
        query_task_set: b1.contains(TmfSupport1::QTSS),
        it_nexus_reset: b1.contains(TmfSupport1::ITNRS),
        extended: None,
    };

    if extended {
        let additional_length = basic[3];
        if additional_length < TMF_EXTENDED_ADDITIONAL {
            return Err(DecodeError::ExtendedDataMissing { additional_length });
        }
        let Some(ext) = data.first_chunk::<TMF_EXTENDED_LEN>() else {
            return Err(DecodeError::BufferTooShort {
                what: "extended task management data",
                needed: TMF_EXTENDED_LEN,
                actual: data.len(),
            });
        };
        let s6 = TmfTimeoutSel6::from_bits_retain(ext[6]);
        let s7 = TmfTimeoutSel7::from_bits_retain(ext[7]);
        report.extended = Some(TmfExtended {
            timeouts_valid: ext[4] & 0x01 != 0,
            abort_task_long: s6.contains(TmfTimeoutSel6::ATTS),
            abort_task_set_long: s6.contains(TmfTimeoutSel6::ATSTS),
            clear_aca_long: s6.contains(TmfTimeoutSel6::CACATS),
            clear_task_set_long: s6.contains(TmfTimeoutSel6::CTSTS),
            logical_unit_reset_long: s6.contains(TmfTimeoutSel6::LURTS),
            query_task_long: s6.contains(TmfTimeoutSel6::QTTS),
            query_async_event_long: s7.contains(TmfTimeoutSel7::QAETS),
            query_task_set_long: s7.contains(TmfTimeoutSel7::QTSTS),
            it_nexus_reset_long: s7.contains(TmfTimeoutSel7::ITNRTS),
            long_timeout: u32::from_be_bytes([ext[8], ext[9], ext[10], ext[11]]),
            short_timeout: u32::from_be_bytes([ext[12], ext[13], ext[14], ext[15]]),
        });
    }

    debug!(
        supported = report.supported_names().len(),
        extended = report.extended.is_some(),
        "decoded task management functions"
    );
    Ok(report)
}
