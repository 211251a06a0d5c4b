// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;
use hex_literal::hex;
use scsi_opcodes_rs::{
    models::{
        DecodeError, Diagnostic, OneCommandRequest, SupportCode, decode_one_command,
    },
    utils::load_hex_response,
};

#[test]
fn test_read16_fixture() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rsoc_one_read16.hex")?;
    let out = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x88, None), Some(0))?;
    assert!(out.is_clean());

    let d = out.value;
    assert_eq!(d.name, "Read(16)");
    assert_eq!(d.support, SupportCode::Standard);
    assert_eq!(d.support.describe(), "supported [conforming to SCSI standard]");
    assert!(d.ctdp);
    assert_eq!(d.cdb_size, 16);
    assert_eq!(d.cdb_usage.len(), 16);
    assert_eq!(d.cdb_usage[0], 0x88);
    assert_eq!(d.cdb_usage[15], 0x07);
    let t = d.timeouts.expect("timeouts");
    assert_eq!((t.nominal, t.recommended), (20, 40));
    assert_eq!(d.duration_limit(), "No command duration limit mode page");
    assert_eq!(d.multiple_logical_units(), "not reported");
    Ok(())
}

#[test]
fn test_service_action_name() -> Result<()> {
    let buf = hex!("00 03 0010 9e10 0000 0000 0000 0000 0000 ffff ff00");
    let req = OneCommandRequest::new(0x9E, Some(0x10));
    let out = decode_one_command(&buf, buf.len(), req, Some(0))?;
    assert_eq!(out.value.name, "Read capacity(16)");
    assert_eq!(out.value.service_action, Some(0x10));
    assert!(out.value.timeouts.is_none());
    Ok(())
}

#[test]
fn test_flag_fields() -> Result<()> {
    // RWCDLP=1; byte1: CTDP=0, MLU=3, CDLP=2, SUPPORT=5
    let buf = hex!("01 75 0006 12 01 ff ff ff 00");
    let out = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x12, None), None)?;
    let d = out.value;
    assert!(d.rwcdlp);
    assert_eq!(d.mlu, 3);
    assert_eq!(d.cdlp, 2);
    assert_eq!(d.support, SupportCode::VendorSpecific);
    assert_eq!(d.duration_limit(), "Command duration limit T2B mode page");
    assert_eq!(d.multiple_logical_units(), "affects all LUs in this target");
    Ok(())
}

#[test]
fn test_not_supported_has_no_usage() -> Result<()> {
    let buf = hex!("00 01 0000");
    let out = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x42, None), Some(0))?;
    assert_eq!(out.value.support, SupportCode::NotSupported);
    assert!(out.value.cdb_usage.is_empty());
    assert_eq!(out.value.name, "Unmap");
    Ok(())
}

#[test]
fn test_reserved_support_noted() -> Result<()> {
    let buf = hex!("00 02 0000");
    let out = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x00, None), None)?;
    assert_eq!(out.value.support, SupportCode::Reserved(2));
    assert_eq!(out.diagnostics, vec![Diagnostic::ReservedSupportCode { code: 2 }]);
    Ok(())
}

#[test]
fn test_usage_data_past_buffer_fails() {
    let buf = hex!("00 03 0010 88 fa ff ff");
    let err = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x88, None), None)
        .expect_err("usage data is cut short");
    assert_eq!(err, DecodeError::BufferTooShort {
        what: "CDB usage data",
        needed: 20,
        actual: 8,
    });
}

#[test]
fn test_timeouts_past_buffer_fails() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rsoc_one_read16.hex")?;
    let err = decode_one_command(&buf, buf.len() - 1, OneCommandRequest::new(0x88, None), None)
        .expect_err("timeouts descriptor is cut short");
    assert!(matches!(err, DecodeError::BufferTooShort {
        what: "command timeouts descriptor",
        needed: 32,
        actual: 31,
    }));
    Ok(())
}

#[test]
fn test_malformed_timeouts_descriptor() -> Result<()> {
    let buf = hex!("00 83 0001 00 000c 00 00 00000001 00000002");
    let out = decode_one_command(&buf, buf.len(), OneCommandRequest::new(0x00, None), None)?;
    assert!(out.value.timeouts.is_none());
    assert_eq!(out.diagnostics, vec![Diagnostic::MalformedTimeoutDescriptor {
        declared_length: 12
    }]);
    Ok(())
}

#[test]
fn test_header_too_short() {
    let err = decode_one_command(&[0, 3], 2, OneCommandRequest::new(0, None), None)
        .expect_err("no header");
    assert!(err.to_string().contains("one command header"));
}
