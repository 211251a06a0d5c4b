// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;
use scsi_opcodes_rs::{
    lookup::resolve_name,
    models::{CommandDescriptor, decode_all_commands},
    ordering::{SortOrder, order_descriptors},
    utils::load_hex_response,
};

fn fixture_descriptors() -> Result<Vec<CommandDescriptor>> {
    let buf = load_hex_response("tests/unit_tests/fixtures/rsoc_all_disk.hex")?;
    Ok(decode_all_commands(&buf, buf.len(), Some(0))?.value.descriptors)
}

#[test]
fn test_numeric_order() -> Result<()> {
    let mut d = fixture_descriptors()?;
    d.reverse();
    order_descriptors(&mut d, SortOrder::Numeric, Some(0));
    let keys: Vec<_> = d.iter().map(CommandDescriptor::numeric_key).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(keys.first(), Some(&(0x00, 0)));
    assert_eq!(keys.last(), Some(&(0xC5, 0)));
    Ok(())
}

#[test]
fn test_alphabetic_names_non_decreasing() -> Result<()> {
    for pdt in [None, Some(0x00), Some(0x01), Some(0x05), Some(0x08)] {
        let mut d = fixture_descriptors()?;
        order_descriptors(&mut d, SortOrder::Alphabetic, pdt);
        let names: Vec<_> = d
            .iter()
            .map(|x| resolve_name(x.operation_code, x.service_action, x.service_action_valid, pdt))
            .collect();
        assert!(names.windows(2).all(|w| w[0].as_bytes() <= w[1].as_bytes()), "{pdt:?}");
    }
    Ok(())
}

#[test]
fn test_sorts_are_stable() -> Result<()> {
    let mut d = fixture_descriptors()?;
    // same opcode twice with differing CDB sizes, the invalid SA counts as 0
    let mut twin = d[1].clone();
    twin.cdb_size = 99;
    twin.service_action = 0x1234;
    d.push(twin);

    let mut numeric = d.clone();
    order_descriptors(&mut numeric, SortOrder::Numeric, Some(0));
    let inquiries: Vec<_> = numeric
        .iter()
        .filter(|x| x.operation_code == 0x12)
        .map(|x| x.cdb_size)
        .collect();
    assert_eq!(inquiries, vec![6, 99]);

    let mut alpha = d;
    order_descriptors(&mut alpha, SortOrder::Alphabetic, Some(0));
    let inquiries: Vec<_> = alpha
        .iter()
        .filter(|x| x.operation_code == 0x12)
        .map(|x| x.cdb_size)
        .collect();
    assert_eq!(inquiries, vec![6, 99]);
    Ok(())
}

#[test]
fn test_sort_order_from_yaml() -> Result<()> {
    let parse = |s: &str| -> Result<SortOrder> { Ok(serde_yaml::from_str(s)?) };
    assert_eq!(parse("Unsorted")?, SortOrder::AsReceived);
    assert_eq!(parse("Numeric")?, SortOrder::Numeric);
    assert_eq!(parse("alphabetic")?, SortOrder::Alphabetic);
    assert!(parse("Random").is_err());
    assert_eq!(SortOrder::default(), SortOrder::Numeric);
    Ok(())
}
