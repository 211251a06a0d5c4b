// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};
use hex::FromHex;

/// Parse a hex dump of a response. Whitespace and commas separate bytes,
/// `#` starts a comment, and `0x` prefixes are accepted. Tokens may hold
/// several bytes (`00000008`).
pub fn parse_hex_response(text: &str) -> Result<Vec<u8>> {
    let mut digits = String::with_capacity(text.len());
    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("");
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let token = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            ensure!(
                token.len() % 2 == 0,
                "line {}: odd number of hex digits in {token:?}",
                lineno + 1
            );
            digits.push_str(token);
        }
    }
    Vec::from_hex(&digits).context("invalid hex digit in response dump")
}

/// Read a response captured earlier (the "inhex" input).
pub fn load_hex_response<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    parse_hex_response(&s).with_context(|| format!("failed to parse {path:?}"))
}
