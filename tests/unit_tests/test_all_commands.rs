// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;
use hex_literal::hex;
use scsi_opcodes_rs::{
    models::{
        Diagnostic, decode_all_commands,
        timeouts::CommandTimeouts,
    },
    utils::load_hex_response,
};

#[test]
fn test_single_inquiry_record() -> Result<()> {
    let buf = hex!("00000008 12000000 00000006");
    let out = decode_all_commands(&buf, buf.len(), None)?;

    assert!(out.is_clean());
    let d = &out.value.descriptors;
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].operation_code, 0x12);
    assert!(!d[0].service_action_valid);
    assert!(!d[0].ctdp);
    assert_eq!(d[0].cdb_size, 6);
    assert_eq!(d[0].timeouts, None);
    assert_eq!(d[0].name, "Inquiry");
    Ok(())
}

#[test]
fn test_record_with_timeouts_descriptor() -> Result<()> {
    let buf = hex!(
        "00000014"
        "12000005 00030006"
        "000a0000 0000001e 0000003c"
    );
    assert_eq!(buf.len(), 24);
    let out = decode_all_commands(&buf, buf.len(), None)?;

    assert!(out.is_clean());
    let d = &out.value.descriptors[0];
    assert!(d.ctdp);
    assert!(d.service_action_valid);
    assert_eq!(d.service_action, 0x0005);
    assert_eq!(d.timeouts, Some(CommandTimeouts {
        command_specific: 0,
        nominal: 30,
        recommended: 60,
    }));
    Ok(())
}

#[test]
fn test_disk_fixture() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rsoc_all_disk.hex")?;
    let out = decode_all_commands(&buf, buf.len(), Some(0x00))?;
    assert!(out.is_clean());
    assert_eq!(out.value.declared_length, 68);

    let names: Vec<_> = out.value.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec![
        "Test Unit Ready",
        "Inquiry",
        "Read(10)",
        "Read capacity(16)",
        "Report supported operation codes",
        "Write(10)",
        "Vendor specific [0xc5]",
    ]);

    let write10 = &out.value.descriptors[5];
    assert!(write10.ctdp);
    assert_eq!(write10.timeouts.map(|t| t.recommended), Some(60));
    Ok(())
}

#[test]
fn test_declared_length_beyond_buffer() -> Result<()> {
    // claims 0x100 bytes, 3 whole records and 5 stray bytes arrive
    let mut buf = hex!("00000100").to_vec();
    for op in [0x00u8, 0x12, 0x28] {
        buf.extend_from_slice(&[op, 0, 0, 0, 0, 0, 0, 6]);
    }
    buf.extend_from_slice(&[0x2A, 0, 0, 0, 0]);

    let out = decode_all_commands(&buf, buf.len(), None)?;
    assert_eq!(out.value.descriptors.len(), (buf.len() - 4) / 8);
    assert_eq!(out.diagnostics, vec![Diagnostic::Truncated {
        declared: 0x100,
        available: 29,
        used: 24,
    }]);
    Ok(())
}

#[test]
fn test_partial_timeouts_record_ends_list() -> Result<()> {
    // second record sets CTDP but only its first 8 bytes fit
    let buf = hex!(
        "00000010"
        "00000000 00000006"
        "2a000000 0002000a"
    );
    let out = decode_all_commands(&buf, buf.len(), None)?;
    assert_eq!(out.value.descriptors.len(), 1);
    assert_eq!(out.diagnostics, vec![Diagnostic::PartialRecord {
        offset: 12,
        needed: 20,
        available: 8,
    }]);
    Ok(())
}

#[test]
fn test_malformed_timeouts_in_list() -> Result<()> {
    let buf = hex!(
        "00000014"
        "2a000000 0002000a"
        "00080000 0000001e 0000003c"
    );
    let out = decode_all_commands(&buf, buf.len(), None)?;
    let d = &out.value.descriptors[0];
    assert!(d.ctdp);
    assert_eq!(d.timeouts, None);
    assert_eq!(out.diagnostics, vec![Diagnostic::MalformedTimeoutDescriptor {
        declared_length: 8
    }]);
    Ok(())
}

#[test]
fn test_mixed_records_never_overrun() -> Result<()> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rsoc_all_disk.hex")?;
    // every prefix of the response decodes without panicking, and the
    // records found never claim more bytes than were supplied
    for len in 0..=buf.len() {
        match decode_all_commands(&buf, len, Some(0)) {
            Err(_) => assert!(len < 4),
            Ok(out) => {
                let consumed: usize = out
                    .value
                    .descriptors
                    .iter()
                    .map(|d| if d.ctdp { 20 } else { 8 })
                    .sum();
                assert!(4 + consumed <= len, "len {len} consumed {consumed}");
            },
        }
    }
    Ok(())
}
