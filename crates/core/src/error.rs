// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hued-core operations.

use thiserror::Error;

/// All possible errors that can occur in hued-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}\n  hint: see the [bridge] table and light_id in config.toml")]
    InvalidConfig(String),

    #[error("config not found at {0}\n  hint: create it or pass --config <path>")]
    ConfigNotFound(String),

    #[error("cannot determine config directory\n  hint: set HUED_CONFIG or pass --config <path>")]
    NoConfigDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hued-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
