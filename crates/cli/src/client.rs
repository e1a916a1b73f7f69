// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IPC client for communicating with the hued daemon.

use std::io::BufReader;
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use hued_ipc::{framing, Command};

use crate::error::{Error, Result};

/// Read and write timeout for daemon communication.
const TIMEOUT_SECS: u64 = 5;

/// A client connection to the daemon. Each connection carries one command.
pub struct DaemonClient {
    stream: UnixStream,
}

impl DaemonClient {
    /// Connect to the daemon at the given socket path.
    pub fn connect(socket_path: &Path) -> Result<Self> {
        let stream = UnixStream::connect(socket_path).map_err(|source| Error::Connect {
            path: socket_path.display().to_string(),
            source,
        })?;

        stream.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
        stream.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

        Ok(DaemonClient { stream })
    }

    /// Send a command and return the reply line without its newline.
    pub fn send(&mut self, command: Command) -> Result<String> {
        framing::write_line(&mut self.stream, command.as_str())?;
        let mut reader = BufReader::new(&self.stream);
        Ok(framing::read_line(&mut reader)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
