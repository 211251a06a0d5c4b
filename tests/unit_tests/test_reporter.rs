// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::{Result, bail};
use scsi_opcodes_rs::{
    cfg::{
        config::{Config, ReportConfig},
        enums::YesNo,
    },
    client::{
        reporter::{MASK_CDB_MAX, Report, Reporter, enumerate_report},
        transport::{ReplayTransport, ScsiTransport},
    },
    control_block::report_opcodes::ReportingOptions,
    ordering::SortOrder,
    utils::load_hex_response,
};

/// Answers by inspecting the CDB and records every CDB it saw.
struct ScriptedTransport<F: FnMut(&[u8; 16]) -> Result<Vec<u8>>> {
    respond: F,
    issued: Vec<[u8; 16]>,
}

impl<F: FnMut(&[u8; 16]) -> Result<Vec<u8>>> ScriptedTransport<F> {
    fn new(respond: F) -> Self {
        Self {
            respond,
            issued: Vec::new(),
        }
    }
}

impl<F: FnMut(&[u8; 16]) -> Result<Vec<u8>>> ScsiTransport for ScriptedTransport<F> {
    fn execute(&mut self, cdb: &[u8; 16], data_in: &mut [u8]) -> Result<usize> {
        self.issued.push(*cdb);
        let resp = (self.respond)(cdb)?;
        let n = resp.len().min(data_in.len());
        data_in[..n].copy_from_slice(&resp[..n]);
        Ok(resp.len())
    }
}

fn fixture(name: &str) -> Result<Vec<u8>> {
    load_hex_response(format!("tests/unit_tests/fixtures/{name}"))
}

/// A tape drive: INQUIRY says PDT 1, the list holds REWIND and READ POSITION.
fn tape_device(cdb: &[u8; 16]) -> Result<Vec<u8>> {
    match (cdb[0], cdb[1]) {
        (0x12, _) => fixture("inquiry_tape.hex"),
        (0xA3, 0x0C) if cdb[2] & 0x07 == 0 => Ok(vec![
            0, 0, 0, 16, //
            0x01, 0, 0, 0, 0, 0, 0, 6, //
            0x34, 0, 0, 0x06, 0, 0x01, 0, 10,
        ]),
        (0xA3, 0x0C) => {
            let size = 10u16;
            let mut r = vec![0x00, 0x03];
            r.extend_from_slice(&size.to_be_bytes());
            r.push(cdb[3]);
            r.extend(std::iter::repeat_n(0xFF, usize::from(size) - 1));
            Ok(r)
        },
        _ => bail!("unexpected CDB {:02x?}", &cdb[..12]),
    }
}

#[test]
fn test_inquiry_selects_device_type() -> Result<()> {
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), ReportConfig::default());
    assert_eq!(reporter.peripheral_device_type()?, Some(0x01));

    let all = reporter.report_all()?;
    let names: Vec<_> = all.value.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Rewind", "Read position (long form)"]);

    // INQUIRY is issued once
    let t = reporter.into_transport();
    assert_eq!(t.issued.iter().filter(|c| c[0] == 0x12).count(), 1);
    Ok(())
}

#[test]
fn test_listing_sorted_by_opcode_unless_asked() -> Result<()> {
    let descending = |_: &[u8; 16]| -> Result<Vec<u8>> {
        Ok(vec![
            0, 0, 0, 24, //
            0x28, 0, 0, 0, 0, 0, 0, 10, //
            0x12, 0, 0, 0, 0, 0, 0, 6, //
            0x00, 0, 0, 0, 0, 0, 0, 6,
        ])
    };
    let opcodes = |cfg: ReportConfig| -> Result<Vec<u8>> {
        let mut reporter = Reporter::new(ScriptedTransport::new(descending), cfg);
        let all = reporter.report_all()?;
        Ok(all.value.descriptors.iter().map(|d| d.operation_code).collect())
    };

    let cfg = ReportConfig {
        peripheral_device_type: Some(0),
        ..Default::default()
    };
    assert_eq!(opcodes(cfg.clone())?, vec![0x00, 0x12, 0x28]);

    let unsorted = ReportConfig {
        sort: SortOrder::AsReceived,
        ..cfg
    };
    assert_eq!(opcodes(unsorted)?, vec![0x28, 0x12, 0x00]);
    Ok(())
}

#[test]
fn test_no_inquiry_uses_generic_names() -> Result<()> {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        sort: SortOrder::Alphabetic,
        ..Default::default()
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    let all = reporter.report_all()?;
    let names: Vec<_> = all.value.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Pre-fetch(10) service action=0x6", "Rezero Unit"]);

    let t = reporter.into_transport();
    assert_eq!(t.issued.len(), 1);
    assert_eq!(t.issued[0][0], 0xA3);
    Ok(())
}

#[test]
fn test_list_cdb_carries_config() -> Result<()> {
    let cfg = ReportConfig {
        peripheral_device_type: Some(1),
        rctd: YesNo::Yes,
        allocation_length: 1024,
        ..Default::default()
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    reporter.report_all()?;
    let t = reporter.into_transport();
    assert_eq!(&t.issued[0][..12], &[0xA3, 0x0C, 0x80, 0, 0, 0, 0, 0, 0x04, 0, 0, 0]);
    Ok(())
}

#[test]
fn test_one_command_request() -> Result<()> {
    let cfg = ReportConfig {
        peripheral_device_type: Some(1),
        ..Default::default()
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    let one = reporter.report_one(ReportingOptions::OpcodeServiceAction, 0x34, Some(0x06))?;
    assert_eq!(one.value.name, "Read position (long form)");
    assert_eq!(one.value.cdb_usage.len(), 10);

    let t = reporter.into_transport();
    // reporting options 010b, opcode, service action
    assert_eq!(&t.issued[0][1..6], &[0x0C, 0x02, 0x34, 0x00, 0x06]);
    Ok(())
}

#[test]
fn test_configured_reporting_options_reach_cdb() -> Result<()> {
    let cfg = Config::from_yaml("report:\n  PeripheralDeviceType: 1\n  Opcode: 52\n  RepOpts: 3\n")?
        .report;
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    let out = reporter.run()?;
    let Report::OneCommand(one) = &out.report else {
        bail!("expected one command report");
    };
    assert_eq!(one.value.cdb_usage[0], 0x34);

    let t = reporter.into_transport();
    assert_eq!(t.issued.len(), 1);
    // reporting options 011b, no service action sent
    assert_eq!(&t.issued[0][1..6], &[0x0C, 0x03, 0x34, 0x00, 0x00]);
    Ok(())
}

#[test]
fn test_opcode_only_drops_service_action() -> Result<()> {
    let cfg = ReportConfig {
        peripheral_device_type: Some(1),
        ..Default::default()
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    reporter.report_one(ReportingOptions::Opcode, 0x34, Some(0x06))?;
    let t = reporter.into_transport();
    assert_eq!(&t.issued[0][1..6], &[0x0C, 0x01, 0x34, 0x00, 0x00]);
    Ok(())
}

#[test]
fn test_mask_queries_each_command() -> Result<()> {
    let cfg = ReportConfig {
        peripheral_device_type: Some(1),
        mask: YesNo::Yes,
        ..Default::default()
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tape_device), cfg);
    let out = reporter.run()?;
    let Report::AllCommandsWithUsage(masked) = &out.report else {
        bail!("expected usage listing");
    };
    assert_eq!(masked.value.len(), 2);
    assert_eq!(masked.value[0].cdb_usage[0], 0x01);
    assert_eq!(masked.value[1].cdb_usage[0], 0x34);

    // list, then one query per command; READ POSITION keeps its service action
    let t = reporter.into_transport();
    assert_eq!(t.issued.len(), 3);
    assert_eq!(t.issued[1][2] & 0x07, 0x01);
    assert_eq!(t.issued[2][2] & 0x07, 0x02);
    Ok(())
}

#[test]
fn test_cdb_usage_capped() -> Result<()> {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        ..Default::default()
    };
    let huge = |_: &[u8; 16]| -> Result<Vec<u8>> {
        let mut r = vec![0x00, 0x03, 0x00, 100];
        r.extend(std::iter::repeat_n(0xAA, 100));
        Ok(r)
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(huge), cfg);
    let all = scsi_opcodes_rs::models::decode_all_commands(
        &[0, 0, 0, 8, 0x7F, 0, 0, 0x09, 0, 0x01, 0, 100],
        12,
        None,
    )?;
    let usage = reporter.cdb_usage(&all.value.descriptors[0])?;
    assert_eq!(usage.len(), MASK_CDB_MAX);
    Ok(())
}

#[test]
fn test_tmf_extended_request() -> Result<()> {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        repd: YesNo::Yes,
        task_management: YesNo::Yes,
        ..Default::default()
    };
    let tmf = |cdb: &[u8; 16]| -> Result<Vec<u8>> {
        match (cdb[0], cdb[1]) {
            (0xA3, 0x0D) => fixture("rstmf_extended.hex"),
            _ => bail!("unexpected CDB"),
        }
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(tmf), cfg);
    let out = reporter.run()?;
    let Report::TaskManagement(r) = &out.report else {
        bail!("expected task management report");
    };
    assert!(r.extended.is_some());
    assert_eq!(out.peripheral_device_type, None);

    let t = reporter.into_transport();
    assert_eq!(&t.issued[0][..10], &[0xA3, 0x0D, 0x80, 0, 0, 0, 0, 0, 0, 16]);
    Ok(())
}

#[test]
fn test_overlong_transfer_clamped() -> Result<()> {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        allocation_length: 12,
        ..Default::default()
    };
    // claims two records, reports 20 bytes sent into a 12 byte buffer
    let long = |_: &[u8; 16]| -> Result<Vec<u8>> {
        Ok(vec![
            0, 0, 0, 16, 0x00, 0, 0, 0, 0, 0, 0, 6, 0x12, 0, 0, 0, 0, 0, 0, 6,
        ])
    };
    let mut reporter = Reporter::new(ScriptedTransport::new(long), cfg);
    let all = reporter.report_all()?;
    assert_eq!(all.value.descriptors.len(), 1);
    assert!(!all.is_clean());
    Ok(())
}

#[test]
fn test_transport_error_has_context() {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        ..Default::default()
    };
    let failing = |_: &[u8; 16]| -> Result<Vec<u8>> { bail!("CHECK CONDITION") };
    let mut reporter = Reporter::new(ScriptedTransport::new(failing), cfg);
    let err = reporter.report_all().expect_err("transport fails");
    let text = format!("{err:#}");
    assert!(text.contains("REPORT SUPPORTED OPERATION CODES failed"));
    assert!(text.contains("CHECK CONDITION"));
}

#[test]
fn test_short_response_is_an_error() {
    let cfg = ReportConfig {
        no_inquiry: YesNo::Yes,
        ..Default::default()
    };
    let short = |_: &[u8; 16]| -> Result<Vec<u8>> { Ok(vec![0, 0]) };
    let mut reporter = Reporter::new(ScriptedTransport::new(short), cfg);
    assert!(reporter.report_all().is_err());
}

#[test]
fn test_replay_through_run() -> Result<()> {
    let cfg = ReportConfig {
        peripheral_device_type: Some(0),
        sort: SortOrder::Numeric,
        ..Default::default()
    };
    let replay = ReplayTransport::new(fixture("rsoc_all_disk.hex")?);
    let mut reporter = Reporter::new(replay, cfg);
    let out = reporter.run()?;

    let json = serde_json::to_value(&out)?;
    assert_eq!(json["report"], "all_commands");
    assert_eq!(json["device_type_name"], "disk");
    assert_eq!(json["value"]["descriptors"][0]["name"], "Test Unit Ready");
    assert_eq!(reporter.into_transport().issued().len(), 1);
    Ok(())
}

#[test]
fn test_enumerate_without_device() -> Result<()> {
    let cfg = Config::from_yaml("report:\n  Enumerate: yes\n  Opcode: 149\n  ServiceAction: 0\n")?
        .report;
    let json = serde_json::to_value(enumerate_report(&cfg)?)?;
    assert_eq!(json["report"], "name");
    assert_eq!(json["operation_code"], 0x95);
    assert_eq!(json["name"], "Report zones");
    assert!(json["peripheral_device_type"].is_null());

    let tape = ReportConfig {
        peripheral_device_type: Some(1),
        opcode: Some(0x34),
        service_action: Some(0x06),
        enumerate: YesNo::Yes,
        ..Default::default()
    };
    let out = enumerate_report(&tape)?;
    assert_eq!(out.device_type_name, Some("tape"));
    let Report::Name(name) = &out.report else {
        bail!("expected name report");
    };
    assert_eq!(name.name, "Read position (long form)");

    assert!(enumerate_report(&ReportConfig::default()).is_err());
    Ok(())
}
