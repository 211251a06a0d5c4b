// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};

pub const DEFAULT_CONFIG_PATH: &str = "tests/config.yaml";
pub const DEFAULT_LOGGER_CONFIG_PATH: &str = "tests/config_logger.yaml";

/// Canonical absolute path of an existing file; relative paths are taken
/// from the working directory.
pub fn resolve_config_path(rel: impl AsRef<Path>) -> Result<PathBuf> {
    let p = rel.as_ref();
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .context("cannot get current working dir")?
            .join(p)
    };
    let canon = abs
        .canonicalize()
        .with_context(|| format!("failed to canonicalize path {abs:?}"))?;
    ensure!(canon.is_file(), "{canon:?} is not a file");
    Ok(canon)
}

/// `scsi-opcodes-rs [CONFIG] [LOGGER_CONFIG]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config: PathBuf,
    pub logger: PathBuf,
}

impl CliPaths {
    /// Positional arguments after the program name; missing ones fall back
    /// to the files under `tests/`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let config = args.next().unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
        let logger = args
            .next()
            .unwrap_or_else(|| DEFAULT_LOGGER_CONFIG_PATH.into());
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?}; usage: scsi-opcodes-rs [CONFIG] [LOGGER_CONFIG]");
        }
        Ok(Self {
            config: resolve_config_path(&config)?,
            logger: resolve_config_path(&logger)?,
        })
    }
}
