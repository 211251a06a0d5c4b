// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;
use scsi_opcodes_rs::{
    models::{DecodeError, TaskManagementReport, decode_tmf},
    utils::load_hex_response,
};

#[test]
fn test_abort_task_only() -> Result<()> {
    let r = decode_tmf(&[0x80, 0x00, 0, 0], 4, false)?;
    assert_eq!(r, TaskManagementReport {
        abort_task: true,
        ..Default::default()
    });
    assert_eq!(r.supported_names(), vec!["Abort task"]);
    assert!(r.extended.is_none());
    Ok(())
}

#[test]
fn test_all_basic_bits() -> Result<()> {
    let r = decode_tmf(&[0xFF, 0x07, 0, 0], 4, false)?;
    assert_eq!(r.supported_names().len(), 11);
    assert!(r.target_reset && r.wakeup && r.it_nexus_reset);
    Ok(())
}

#[test]
fn test_extended_fixture() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rstmf_extended.hex")?;
    let r = decode_tmf(&buf, buf.len(), true)?;

    assert_eq!(r.supported_names(), vec![
        "Abort task",
        "Abort task set",
        "Clear ACA",
        "Clear task set",
        "Logical unit reset",
        "Query asynchronous event",
        "Query task set",
        "I_T nexus reset",
    ]);

    let ext = r.extended.expect("extended block");
    assert!(ext.timeouts_valid);
    assert!(ext.abort_task_long && ext.abort_task_set_long);
    assert!(!ext.clear_aca_long);
    assert!(ext.it_nexus_reset_long);
    assert!(!ext.query_task_set_long);
    assert_eq!(ext.long_timeout, 3000);
    assert_eq!(ext.long_timeout_ms(), 300_000);
    assert_eq!(ext.short_timeout_ms(), 1_000);
    Ok(())
}

#[test]
fn test_extended_requested_but_basic_returned() {
    let err = decode_tmf(&[0x80, 0, 0, 0], 4, true).expect_err("no extended data");
    assert_eq!(err, DecodeError::ExtendedDataMissing {
        additional_length: 0
    });
}

#[test]
fn test_extended_cut_short() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rstmf_extended.hex")?;
    let err = decode_tmf(&buf, 10, true).expect_err("truncated");
    assert_eq!(err, DecodeError::BufferTooShort {
        what: "extended task management data",
        needed: 16,
        actual: 10,
    });
    // the basic part alone still decodes
    assert!(decode_tmf(&buf, 10, false)?.abort_task);
    Ok(())
}

#[test]
fn test_too_short() {
    assert!(matches!(
        decode_tmf(&[0x80, 0x00], 2, false),
        Err(DecodeError::BufferTooShort { needed: 4, .. })
    ));
}
