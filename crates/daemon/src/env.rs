// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by the daemon.

use std::path::PathBuf;

/// Environment variable names.
pub mod names {
    /// Path of the daemon config file.
    pub const HUED_CONFIG: &str = "HUED_CONFIG";
    /// Append daemon logs to this file instead of stderr.
    pub const HUED_LOG_FILE: &str = "HUED_LOG_FILE";
    /// Log level filter read by tracing-subscriber.
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Returns the value of `HUED_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    non_empty(names::HUED_CONFIG).map(PathBuf::from)
}

/// Returns the value of `HUED_LOG_FILE` if set and non-empty.
pub fn log_file() -> Option<PathBuf> {
    non_empty(names::HUED_LOG_FILE).map(PathBuf::from)
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
