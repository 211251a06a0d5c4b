// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Issuing the report commands against a device.

/// Report orchestration: INQUIRY, RSOC, RSTMF.
pub mod reporter;
/// The command execution seam.
pub mod transport;
