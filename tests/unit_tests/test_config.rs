// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::{Context, Result};
use scsi_opcodes_rs::{
    cfg::{
        cli::{CliPaths, resolve_config_path},
        config::Config,
        enums::YesNo,
        logger::init_logger,
    },
    control_block::report_opcodes::ReportingOptions,
    ordering::SortOrder,
    utils::load_hex_response,
};
use serial_test::serial;

#[test]
fn test_load_repo_config() -> Result<()> {
    let cfg = resolve_config_path("tests/config.yaml")
        .and_then(Config::load_from_file)
        .context("failed to resolve or load config")?;

    assert_eq!(cfg.report.sort, SortOrder::Numeric);
    assert_eq!(cfg.report.peripheral_device_type, Some(0));
    assert_eq!(cfg.report.rctd, YesNo::Yes);
    assert_eq!(cfg.report.allocation_length, 8192);
    assert_eq!(cfg.report.reporting_options(), ReportingOptions::AllCommands);
    assert!(cfg.output.pretty.as_bool());

    let in_hex = cfg.input.in_hex.context("InHex")?;
    assert!(!load_hex_response(in_hex)?.is_empty());
    Ok(())
}

#[test]
fn test_single_command_query() -> Result<()> {
    let cfg = Config::from_yaml(
        "report:\n  Opcode: 158\n  ServiceAction: 16\n  Mask: yes\n  Sort: alphabetic\n",
    )?;
    assert_eq!(cfg.report.reporting_options(), ReportingOptions::OpcodeServiceAction);
    // mask only applies to the list
    assert_eq!(cfg.report.mask, YesNo::No);
    assert_eq!(cfg.report.sort, SortOrder::Alphabetic);
    Ok(())
}

#[test]
fn test_invalid_values() {
    for yaml in [
        "report:\n  AllocationLength: 2\n",
        "report:\n  AllocationLength: 70000\n",
        "report:\n  TaskManagement: Yes\n  Opcode: 18\n",
        "report:\n  Sort: Sideways\n",
        "report:\n  Rctd: maybe\n",
    ] {
        assert!(Config::from_yaml(yaml).is_err(), "{yaml}");
    }
}

#[test]
fn test_missing_config_file() {
    assert!(resolve_config_path("tests/does_not_exist.yaml").is_err());
    assert!(Config::load_from_file("tests/does_not_exist.yaml").is_err());
}

#[test]
fn test_cli_paths() -> Result<()> {
    let defaults = CliPaths::from_args(Vec::<String>::new())?;
    assert!(defaults.config.ends_with("tests/config.yaml"));
    assert!(defaults.logger.ends_with("tests/config_logger.yaml"));

    let explicit = CliPaths::from_args(["tests/config_logger.yaml".to_string()])?;
    assert_eq!(explicit.config, defaults.logger);

    assert!(CliPaths::from_args(["tests".to_string()]).is_err());
    let three = ["a", "b", "c"].map(String::from);
    assert!(CliPaths::from_args(three).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_logger_rejects_bad_config() -> Result<()> {
    let dir = std::env::temp_dir().join("scsi-opcodes-logger-test");
    std::fs::create_dir_all(&dir)?;

    let bad_output = dir.join("bad_output.yaml");
    std::fs::write(&bad_output, "logger:\n  level: info\n  output: printer\n")?;
    assert!(init_logger(bad_output.to_str().context("utf-8 path")?).is_err());

    let no_file = dir.join("no_file.yaml");
    std::fs::write(&no_file, "logger:\n  level: info\n  output: file\n")?;
    let err = init_logger(no_file.to_str().context("utf-8 path")?).expect_err("file section");
    assert!(err.to_string().contains("no file section"));
    Ok(())
}
