// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Decoder for SCSI REPORT SUPPORTED OPERATION CODES and REPORT SUPPORTED
//! TASK MANAGEMENT FUNCTIONS parameter data, with a command name catalog.

/// Compiled-in name tables.
pub mod catalog;
/// Handles configuration, config path resolution, and logging.
pub mod cfg;
/// Transport seam and the report driver.
pub mod client;
/// CDB builders for INQUIRY and the two report commands.
pub mod control_block;
/// Name resolution with device-type aware fallback.
pub mod lookup;
/// Decoded report data and the decoders producing it.
pub mod models;
/// Ordering of the all-commands list.
pub mod ordering;
/// Hex dump loading.
pub mod utils;
