// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::device_type::PDT_MAX,
    cfg::enums::YesNo,
    control_block::report_opcodes::{DEFAULT_ALLOCATION_LEN, ReportingOptions},
    ordering::SortOrder,
};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    /// What to ask the device and how to present it.
    #[serde(default)]
    pub report: ReportConfig,
    /// Where the response data comes from when no device is used.
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ReportConfig {
    #[serde(default, rename = "Sort")]
    /// Order of the all-commands listing.
    pub sort: SortOrder,

    #[serde(default, rename = "PeripheralDeviceType")]
    /// Device type used for names; skips INQUIRY when set.
    pub peripheral_device_type: Option<u8>,

    #[serde(default, rename = "NoInquiry")]
    /// Do not issue INQUIRY; names fall back to generic entries.
    pub no_inquiry: YesNo,

    #[serde(default, rename = "Rctd")]
    /// Ask for command timeouts descriptors.
    pub rctd: YesNo,

    #[serde(default, rename = "Repd")]
    /// Ask for extended task management data.
    pub repd: YesNo,

    #[serde(default, rename = "Mask")]
    /// Fetch the CDB usage data of every listed command.
    pub mask: YesNo,

    #[serde(default = "default_allocation_length", rename = "AllocationLength")]
    pub allocation_length: u32,

    #[serde(default, rename = "Opcode")]
    /// Report on this one command only.
    pub opcode: Option<u8>,

    #[serde(default, rename = "ServiceAction")]
    pub service_action: Option<u16>,

    #[serde(default, rename = "RepOpts")]
    /// REPORTING OPTIONS value (0..=3); derived from Opcode and
    /// ServiceAction when absent.
    pub rep_opts: Option<ReportingOptions>,

    #[serde(default, rename = "TaskManagement")]
    /// Report task management functions instead of operation codes.
    pub task_management: YesNo,

    #[serde(default, rename = "Enumerate")]
    /// Only name Opcode (and ServiceAction) from the catalog; nothing is
    /// sent or read.
    pub enumerate: YesNo,
}

fn default_allocation_length() -> u32 {
    DEFAULT_ALLOCATION_LEN
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            peripheral_device_type: None,
            no_inquiry: YesNo::No,
            rctd: YesNo::No,
            repd: YesNo::No,
            mask: YesNo::No,
            allocation_length: DEFAULT_ALLOCATION_LEN,
            opcode: None,
            service_action: None,
            rep_opts: None,
            task_management: YesNo::No,
            enumerate: YesNo::No,
        }
    }
}

impl ReportConfig {
    /// Options sent in the REPORT SUPPORTED OPERATION CODES CDB.
    #[inline]
    pub fn reporting_options(&self) -> ReportingOptions {
        self.rep_opts
            .unwrap_or_else(|| ReportingOptions::derive(self.opcode, self.service_action))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct InputConfig {
    #[serde(default, rename = "InHex")]
    /// Hex dump of a previously captured response.
    pub in_hex: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OutputConfig {
    #[serde(default, rename = "Path")]
    /// Write the JSON report here instead of stdout.
    pub path: Option<PathBuf>,
    #[serde(default, rename = "Pretty")]
    pub pretty: YesNo,
}

impl Config {
    /// Loads the YAML config from `path` and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {path:?}"))?;
        Self::from_yaml(&s)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(s).context("failed to parse config YAML")?;
        cfg.validate_and_normalize()?;
        Ok(cfg)
    }

    /// Validates invariants and normalizes derived fields.
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        let r = &mut self.report;
        ensure!(
            (4..=0xFFFF).contains(&r.allocation_length),
            "AllocationLength must be in 4..=65535, got {}",
            r.allocation_length
        );
        if let Some(pdt) = r.peripheral_device_type {
            ensure!(
                pdt <= PDT_MAX,
                "PeripheralDeviceType must be <= 0x{PDT_MAX:x}, got 0x{pdt:x}"
            );
            // device type known, INQUIRY not needed
            r.no_inquiry = YesNo::Yes;
        }
        ensure!(
            r.service_action.is_none() || r.opcode.is_some(),
            "ServiceAction requires Opcode"
        );
        ensure!(
            !(r.task_management.as_bool() && r.opcode.is_some()),
            "TaskManagement cannot be combined with Opcode"
        );
        ensure!(
            !r.enumerate.as_bool() || r.opcode.is_some(),
            "Enumerate requires Opcode"
        );
        if let Some(opts) = r.rep_opts {
            let n = u8::from(opts);
            ensure!(
                !r.task_management.as_bool(),
                "RepOpts cannot be combined with TaskManagement"
            );
            ensure!(
                opts.is_one_command() == r.opcode.is_some(),
                "RepOpts {n} {} Opcode",
                if opts.is_one_command() { "requires" } else { "cannot be combined with" }
            );
            ensure!(
                opts != ReportingOptions::OpcodeServiceAction || r.service_action.is_some(),
                "RepOpts 2 requires ServiceAction"
            );
            ensure!(
                opts.takes_service_action() || r.service_action.is_none(),
                "RepOpts {n} does not send ServiceAction"
            );
        }
        if r.mask.as_bool() && r.opcode.is_some() {
            tracing::debug!("Mask ignored for a single command report");
            r.mask = YesNo::No;
        }
        Ok(())
    }
}
