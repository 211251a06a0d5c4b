// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! CDB builders, each writing into a 16-byte buffer.

/// Standard INQUIRY, for the peripheral device type.
pub mod inquiry;
/// REPORT SUPPORTED OPERATION CODES.
pub mod report_opcodes;
/// REPORT SUPPORTED TASK MANAGEMENT FUNCTIONS.
pub mod report_tmf;
