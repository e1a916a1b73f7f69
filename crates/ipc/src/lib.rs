// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared IPC protocol for CLI-daemon communication.
//!
//! This crate defines the commands and replies exchanged between `huectl`
//! and the `hued` daemon. The protocol is line oriented: a client connects,
//! writes one command line, reads one reply line, and the daemon closes the
//! connection.
//!
//! | Request  | Reply                                    |
//! |----------|------------------------------------------|
//! | `status` | `60%`                                    |
//! | `toggle` | `ok: light toggled, now on`              |
//! | `up`     | `ok: brightness up to 65%`               |
//! | `down`   | `ok: brightness down to 55%`             |
//! | other    | `error: unknown command "other"`         |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable: override the daemon socket path.
pub const SOCKET_ENV: &str = "HUED_SOCKET";
/// Environment variable: per-user runtime directory.
pub const XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";

/// Prefix of every successful command reply except `status`.
pub const OK_PREFIX: &str = "ok: ";
/// Prefix of every failure reply.
pub const ERROR_PREFIX: &str = "error: ";

/// Error returned by `FromStr` for an unrecognized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command {:?}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

/// Direction of a relative brightness change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Sign applied to the configured step.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Command sent from CLI to daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report the brightness percentage.
    Status,
    /// Flip the power state.
    Toggle,
    /// Brighten or dim by the configured step.
    Adjust(Direction),
}

impl Command {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Toggle => "toggle",
            Command::Adjust(direction) => direction.as_str(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parses a command line. Surrounding whitespace is ignored; matching is
    /// case sensitive.
    fn from_str(s: &str) -> Result<Self, UnknownCommand> {
        match s.trim() {
            "status" => Ok(Command::Status),
            "toggle" => Ok(Command::Toggle),
            "up" => Ok(Command::Adjust(Direction::Up)),
            "down" => Ok(Command::Adjust(Direction::Down)),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Reply sent from daemon to CLI.
///
/// `Display` produces the exact wire text without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Brightness percentage (`status`).
    Brightness(u8),
    /// Power state after a toggle.
    Toggled { on: bool },
    /// Brightness after an adjustment.
    Adjusted { direction: Direction, percent: u8 },
    /// Any failure.
    Error { message: String },
}

impl Reply {
    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Brightness(pct) => write!(f, "{}%", pct),
            Reply::Toggled { on } => write!(
                f,
                "{}light toggled, now {}",
                OK_PREFIX,
                if *on { "on" } else { "off" }
            ),
            Reply::Adjusted { direction, percent } => {
                write!(f, "{}brightness {} to {}%", OK_PREFIX, direction, percent)
            }
            Reply::Error { message } => write!(f, "{}{}", ERROR_PREFIX, message),
        }
    }
}

/// Returns true if a raw reply line reports a failure.
pub fn is_error_line(line: &str) -> bool {
    line.trim_start().starts_with(ERROR_PREFIX)
}

// ============================================================================
// Socket location
// ============================================================================

/// Socket path: `$HUED_SOCKET` if set, else [`default_socket_path`].
pub fn socket_path() -> PathBuf {
    match std::env::var_os(SOCKET_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_socket_path(),
    }
}

/// `$XDG_RUNTIME_DIR/hued-<uid>.sock`, falling back to `/tmp`.
pub fn default_socket_path() -> PathBuf {
    runtime_dir().join(format!("hued-{}.sock", current_uid()))
}

fn runtime_dir() -> PathBuf {
    match std::env::var_os(XDG_RUNTIME_DIR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("/tmp"),
    }
}

#[cfg(unix)]
fn current_uid() -> u32 {
    nix::unistd::getuid().as_raw()
}

#[cfg(not(unix))]
fn current_uid() -> u32 {
    0
}

// ============================================================================
// Line framing
// ============================================================================

/// IPC line framing for blocking clients.
///
/// A message is UTF-8 text terminated by `\n`. Lines longer than
/// [`MAX_LINE`](framing::MAX_LINE) bytes are rejected.
pub mod framing {
    use std::io::{BufRead, Read, Write};

    /// Maximum line size (1KB); commands and replies are a few bytes.
    pub const MAX_LINE: usize = 1024;

    /// Write one line, appending the newline.
    pub fn write_line<W: Write>(writer: &mut W, line: &str) -> std::io::Result<()> {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    /// Read one line without its line terminator.
    ///
    /// A final line without a trailing newline is accepted; an empty stream is
    /// an `UnexpectedEof` error.
    pub fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
        let mut buf = String::new();
        let limit = u64::try_from(MAX_LINE + 1).unwrap_or(u64::MAX);
        let n = reader.by_ref().take(limit).read_line(&mut buf)?;
        if n == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed before a line was received",
            ));
        }
        if n > MAX_LINE {
            return Err(std::io::Error::other(format!(
                "line too long (max {} bytes)",
                MAX_LINE
            )));
        }
        Ok(buf.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
