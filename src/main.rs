// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::{Context, Result};
use scsi_opcodes_rs::{
    cfg::{
        cli::CliPaths,
        config::Config,
        enums::YesNo,
        logger::{init_logger, save_to_file},
    },
    client::{
        reporter::{Reporter, enumerate_report},
        transport::ReplayTransport,
    },
    utils::load_hex_response,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    let paths = CliPaths::from_args(std::env::args().skip(1))?;
    let _init_logger = init_logger(&paths.logger)?;

    let mut config = Config::load_from_file(&paths.config)
        .context("failed to resolve or load config")?;

    let output = if config.report.enumerate.as_bool() {
        enumerate_report(&config.report)?
    } else {
        let in_hex = config
            .input
            .in_hex
            .clone()
            .context("input.InHex must name a captured response; no device access is built in")?;
        let response = load_hex_response(&in_hex)?;
        info!(path = ?in_hex, len = response.len(), "loaded response");

        // a replayed response cannot answer INQUIRY or per-command queries
        if config.report.peripheral_device_type.is_none() {
            config.report.no_inquiry = YesNo::Yes;
        }
        if config.report.mask.as_bool() {
            warn!("Mask needs a live device, ignored for replayed data");
            config.report.mask = YesNo::No;
        }

        let mut reporter = Reporter::new(ReplayTransport::new(response), config.report.clone());
        reporter.run()?
    };

    let json = if config.output.pretty.as_bool() {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    match &config.output.path {
        Some(path) => save_to_file(path, &json)?,
        None => println!("{json}"),
    }

    Ok(())
}
