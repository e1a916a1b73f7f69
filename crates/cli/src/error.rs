// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors talking to the daemon.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to connect to daemon: {source}\n  hint: is hued running? (socket: {path})")]
    Connect {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("daemon communication failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for huectl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
