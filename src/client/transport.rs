// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;

/// Something that can run a data-in SCSI command: an SG_IO handle, an iSCSI
/// session, or a canned response in tests.
pub trait ScsiTransport {
    /// Send `cdb` and fill `data_in` with the response. Returns how many
    /// bytes the device transferred. Timeouts and sense handling belong to
    /// the implementation.
    fn execute(&mut self, cdb: &[u8; 16], data_in: &mut [u8]) -> Result<usize>;
}

impl<T: ScsiTransport + ?Sized> ScsiTransport for &mut T {
    #[inline]
    fn execute(&mut self, cdb: &[u8; 16], data_in: &mut [u8]) -> Result<usize> {
        (**self).execute(cdb, data_in)
    }
}

impl<T: ScsiTransport + ?Sized> ScsiTransport for Box<T> {
    #[inline]
    fn execute(&mut self, cdb: &[u8; 16], data_in: &mut [u8]) -> Result<usize> {
        (**self).execute(cdb, data_in)
    }
}

/// Answers every command with the same captured response. Used to decode a
/// hex dump through the normal reporting path.
#[derive(Debug, Clone, Default)]
pub struct ReplayTransport {
    response: Vec<u8>,
    issued: Vec<[u8; 16]>,
}

impl ReplayTransport {
    pub fn new(response: Vec<u8>) -> Self {
        Self {
            response,
            issued: Vec::new(),
        }
    }

    /// CDBs seen so far, oldest first.
    pub fn issued(&self) -> &[[u8; 16]] {
        &self.issued
    }
}

impl ScsiTransport for ReplayTransport {
    fn execute(&mut self, cdb: &[u8; 16], data_in: &mut [u8]) -> Result<usize> {
        self.issued.push(*cdb);
        let n = self.response.len().min(data_in.len());
        data_in[..n].copy_from_slice(&self.response[..n]);
        tracing::trace!(opcode = cdb[0], len = n, "replayed response");
        Ok(n)
    }
}
