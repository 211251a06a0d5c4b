// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use core::fmt;

use serde::Serialize;
use thiserror::Error;

/// Hard decode failures. Single-record reports fail with these; the
/// all-commands list records a [`Diagnostic`] and keeps what it decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{what}: need {needed} bytes, have {actual}")]
    BufferTooShort {
        what: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error(
        "extended task management data requested, additional length is \
         {additional_length} (need >= 12)"
    )]
    ExtendedDataMissing { additional_length: u8 },
}

/// Non-fatal anomaly noticed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Declared command data length exceeds what was received.
    Truncated {
        declared: u32,
        available: usize,
        used: usize,
    },
    /// A record starting at `offset` needs more bytes than remain.
    PartialRecord {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Command timeouts descriptor length other than 10.
    MalformedTimeoutDescriptor { declared_length: u16 },
    ReservedSupportCode { code: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Diagnostic::Truncated {
                declared,
                available,
                used,
            } => write!(
                f,
                "command data length {declared} exceeds {available} received bytes, using {used}"
            ),
            Diagnostic::PartialRecord {
                offset,
                needed,
                available,
            } => write!(
                f,
                "record at offset {offset} needs {needed} bytes, only {available} left"
            ),
            Diagnostic::MalformedTimeoutDescriptor { declared_length } => write!(
                f,
                "command timeouts descriptor length {declared_length}, expected 10"
            ),
            Diagnostic::ReservedSupportCode { code } => {
                write!(f, "reserved support value 0x{code:x}")
            },
        }
    }
}

/// Decoded value plus the anomalies met on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Decoded<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}

/// Record a diagnostic and log it.
pub(crate) fn note(diagnostics: &mut Vec<Diagnostic>, d: Diagnostic) {
    tracing::warn!(diagnostic = %d, "decode anomaly");
    diagnostics.push(d);
}
