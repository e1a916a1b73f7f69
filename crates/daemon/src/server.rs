// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unix socket command server.
//!
//! Each connection carries one command line and receives one reply line.

use std::time::Duration;

use hued_ipc::framing::MAX_LINE;
use hued_ipc::{Command, Reply};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;

use crate::bridge::Bridge;
use crate::state::Daemon;

/// Pause after a failed accept so a persistent error does not spin.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Accept connections forever, one task per client.
pub async fn run<B: Bridge>(listener: UnixListener, daemon: Daemon<B>) {
    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let daemon = daemon.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, &daemon).await {
                        tracing::warn!("connection error: {}", e);
                    }
                });
            }
            Err(e) => {
                tracing::warn!("failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            }
        }
    }
}

/// Read one command, execute it and write the reply.
pub async fn handle_connection<S, B>(stream: S, daemon: &Daemon<B>) -> std::io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
    B: Bridge,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader.take(MAX_LINE as u64));

    let mut raw = Vec::new();
    let n = reader.read_until(b'\n', &mut raw).await?;
    if n == 0 {
        return Ok(());
    }

    let reply = if n >= MAX_LINE && !raw.ends_with(b"\n") {
        Reply::error("command too long")
    } else {
        // Invalid UTF-8 still gets an unknown command reply.
        let line = String::from_utf8_lossy(&raw);
        match line.parse::<Command>() {
            Ok(command) => {
                tracing::debug!(%command, "received command");
                daemon.execute(command).await
            }
            Err(e) => Reply::error(e.to_string()),
        }
    };

    writer.write_all(format!("{}\n", reply).as_bytes()).await?;
    writer.flush().await?;
    writer.shutdown().await
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
