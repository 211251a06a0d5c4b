// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::transport::ScsiTransport;
use crate::{
    catalog::PeripheralDeviceType,
    cfg::config::ReportConfig,
    control_block::{
        inquiry::{INQUIRY_ALLOCATION_LEN, fill_inquiry_standard, parse_inquiry_standard},
        report_opcodes::{ReportingOptions, fill_report_supported_opcodes},
        report_tmf::{fill_report_supported_tmf, tmf_allocation_len},
    },
    lookup::enumerate_name,
    models::{
        AllCommands, CommandDescriptor, Decoded, OneCommandDescriptor, OneCommandRequest,
        TaskManagementReport, decode_all_commands, decode_one_command, decode_tmf,
    },
    ordering::order_descriptors,
};

/// Longest CDB usage mask kept per listed command.
pub const MASK_CDB_MAX: usize = 80;

/// An all-commands entry together with its CDB usage data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskedCommand {
    #[serde(flatten)]
    pub descriptor: CommandDescriptor,
    pub cdb_usage: Vec<u8>,
}

/// A catalog name, resolved without asking any device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandName {
    pub operation_code: u8,
    pub service_action: Option<u16>,
    pub name: String,
}

/// What a configured run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    AllCommands(Decoded<AllCommands>),
    AllCommandsWithUsage(Decoded<Vec<MaskedCommand>>),
    OneCommand(Decoded<OneCommandDescriptor>),
    TaskManagement(TaskManagementReport),
    Name(CommandName),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOutput {
    pub peripheral_device_type: Option<u8>,
    pub device_type_name: Option<&'static str>,
    #[serde(flatten)]
    pub report: Report,
}

impl ReportOutput {
    fn new(pdt: Option<u8>, report: Report) -> Self {
        Self {
            peripheral_device_type: pdt,
            device_type_name: pdt.map(|p| PeripheralDeviceType(p).name()),
            report,
        }
    }
}

/// Name the configured opcode and service action for the configured device
/// type (generic names when none is set).
pub fn enumerate_report(cfg: &ReportConfig) -> Result<ReportOutput> {
    let opcode = cfg.opcode.context("Enumerate requires Opcode")?;
    let pdt = cfg.peripheral_device_type;
    let name = enumerate_name(opcode, cfg.service_action, pdt);
    debug!(opcode, service_action = ?cfg.service_action, %name, "enumerated");
    Ok(ReportOutput::new(
        pdt,
        Report::Name(CommandName {
            operation_code: opcode,
            service_action: cfg.service_action,
            name,
        }),
    ))
}

/// Issues the report commands over a transport and decodes the answers.
pub struct Reporter<T: ScsiTransport> {
    transport: T,
    cfg: ReportConfig,
    pdt: Option<Option<u8>>,
}

impl<T: ScsiTransport> Reporter<T> {
    pub fn new(transport: T, cfg: ReportConfig) -> Self {
        Self {
            transport,
            cfg,
            pdt: None,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.cfg
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Run one data-in command; the result is cut to what the device says
    /// it sent, never more than `allocation_len`.
    fn issue(&mut self, cdb: &[u8; 16], allocation_len: usize, what: &str) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; allocation_len];
        let received = self
            .transport
            .execute(cdb, &mut buf)
            .with_context(|| format!("{what} failed"))?;
        if received > allocation_len {
            warn!(received, allocation_len, "{what}: device reported more than allocated");
        }
        buf.truncate(received.min(allocation_len));
        debug!(len = buf.len(), "{what} response");
        Ok(buf)
    }

    /// Device type for name lookups: the configured override, otherwise
    /// INQUIRY unless disabled. Resolved once.
    pub fn peripheral_device_type(&mut self) -> Result<Option<u8>> {
        if let Some(pdt) = self.pdt {
            return Ok(pdt);
        }
        let pdt = if let Some(pdt) = self.cfg.peripheral_device_type {
            Some(pdt)
        } else if self.cfg.no_inquiry.as_bool() {
            None
        } else {
            let mut cdb = [0u8; 16];
            fill_inquiry_standard(&mut cdb, INQUIRY_ALLOCATION_LEN);
            let buf = self.issue(&cdb, usize::from(INQUIRY_ALLOCATION_LEN), "INQUIRY")?;
            let inq = parse_inquiry_standard(&buf)?;
            info!(
                vendor = %inq.vendor_id,
                product = %inq.product_id,
                revision = %inq.product_rev,
                device_type = inq.device_type.name(),
                "inquiry"
            );
            Some(inq.device_type.0)
        };
        self.pdt = Some(pdt);
        Ok(pdt)
    }

    /// List every supported command, ordered per config.
    pub fn report_all(&mut self) -> Result<Decoded<AllCommands>> {
        let pdt = self.peripheral_device_type()?;
        let alloc = self.cfg.allocation_length;
        let mut cdb = [0u8; 16];
        fill_report_supported_opcodes(
            &mut cdb,
            self.cfg.rctd.as_bool(),
            ReportingOptions::AllCommands,
            0,
            0,
            alloc,
        );
        let buf = self.issue(&cdb, alloc as usize, "REPORT SUPPORTED OPERATION CODES")?;
        let mut out = decode_all_commands(&buf, buf.len(), pdt)?;
        order_descriptors(&mut out.value.descriptors, self.cfg.sort, pdt);
        Ok(out)
    }

    /// Details of one command, asked for with the given reporting options.
    pub fn report_one(
        &mut self,
        options: ReportingOptions,
        opcode: u8,
        service_action: Option<u16>,
    ) -> Result<Decoded<OneCommandDescriptor>> {
        let pdt = self.peripheral_device_type()?;
        let alloc = self.cfg.allocation_length;
        let sent_sa = service_action
            .filter(|_| options.takes_service_action())
            .unwrap_or(0);
        let mut cdb = [0u8; 16];
        fill_report_supported_opcodes(
            &mut cdb,
            self.cfg.rctd.as_bool(),
            options,
            opcode,
            sent_sa,
            alloc,
        );
        let buf = self.issue(&cdb, alloc as usize, "REPORT SUPPORTED OPERATION CODES")?;
        let request = OneCommandRequest::new(opcode, service_action);
        Ok(decode_one_command(&buf, buf.len(), request, pdt)?)
    }

    pub fn report_tmf(&mut self) -> Result<TaskManagementReport> {
        let repd = self.cfg.repd.as_bool();
        let alloc = tmf_allocation_len(repd);
        let mut cdb = [0u8; 16];
        fill_report_supported_tmf(&mut cdb, repd, alloc);
        let buf = self.issue(
            &cdb,
            alloc as usize,
            "REPORT SUPPORTED TASK MANAGEMENT FUNCTIONS",
        )?;
        Ok(decode_tmf(&buf, buf.len(), repd)?)
    }

    /// CDB usage data of a listed command, at most [`MASK_CDB_MAX`] bytes.
    pub fn cdb_usage(&mut self, descriptor: &CommandDescriptor) -> Result<Vec<u8>> {
        let sa = descriptor
            .service_action_valid
            .then_some(descriptor.service_action);
        let options = ReportingOptions::derive(Some(descriptor.operation_code), sa);
        let one = self
            .report_one(options, descriptor.operation_code, sa)
            .with_context(|| format!("usage data for {}", descriptor.name))?;
        let mut usage = one.value.cdb_usage;
        usage.truncate(MASK_CDB_MAX);
        Ok(usage)
    }

    /// [`Self::report_all`] followed by a usage query per entry.
    pub fn report_all_with_usage(&mut self) -> Result<Decoded<Vec<MaskedCommand>>> {
        let all = self.report_all()?;
        let usage = all
            .value
            .descriptors
            .iter()
            .map(|d| self.cdb_usage(d))
            .collect::<Result<Vec<_>>>()?;
        Ok(all.map(|a| {
            a.descriptors
                .into_iter()
                .zip(usage)
                .map(|(descriptor, cdb_usage)| MaskedCommand {
                    descriptor,
                    cdb_usage,
                })
                .collect()
        }))
    }

    /// Run the report the config asks for.
    pub fn run(&mut self) -> Result<ReportOutput> {
        let pdt = self.peripheral_device_type()?;
        let options = self.cfg.reporting_options();
        let report = if self.cfg.task_management.as_bool() {
            Report::TaskManagement(self.report_tmf()?)
        } else if let Some(opcode) = self.cfg.opcode.filter(|_| options.is_one_command()) {
            Report::OneCommand(self.report_one(options, opcode, self.cfg.service_action)?)
        } else if self.cfg.mask.as_bool() {
            Report::AllCommandsWithUsage(self.report_all_with_usage()?)
        } else {
            Report::AllCommands(self.report_all()?)
        };
        Ok(ReportOutput::new(pdt, report))
    }
}
