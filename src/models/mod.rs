// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Decoded forms of the REPORT SUPPORTED OPERATION CODES and REPORT
//! SUPPORTED TASK MANAGEMENT FUNCTIONS parameter data.

/// All-commands list (8 or 20 byte records).
pub mod all_commands;
/// Decode errors and non-fatal diagnostics.
pub mod error;
/// Single command report with CDB usage data.
pub mod one_command;
/// Supported task management functions, basic and extended.
pub mod task_management;
/// Command timeouts descriptor.
pub mod timeouts;

pub use self::{
    all_commands::{AllCommands, CommandDescriptor, decode_all_commands},
    error::{DecodeError, Decoded, Diagnostic},
    one_command::{OneCommandDescriptor, OneCommandRequest, SupportCode, decode_one_command},
    task_management::{TaskManagementReport, TmfExtended, decode_tmf},
    timeouts::CommandTimeouts,
};
