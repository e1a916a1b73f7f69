// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! huectl - command-line client for the `hued` daemon.
//!
//! Sends one command over the daemon's Unix socket and returns the reply
//! line unchanged.

mod cli;
pub mod client;
pub mod error;

pub use cli::{Action, Cli};
pub use client::DaemonClient;
pub use error::{Error, Result};

use std::path::PathBuf;

/// Resolve the socket, send the command and return the daemon's reply.
pub fn run(cli: Cli) -> Result<String> {
    let socket = resolve_socket(cli.socket);
    let mut client = DaemonClient::connect(&socket)?;
    client.send(cli.command.into())
}

/// `--socket` if given, else the shared default location.
pub fn resolve_socket(socket: Option<PathBuf>) -> PathBuf {
    socket.unwrap_or_else(hued_ipc::socket_path)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
