// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration.
//!
//! Configuration is stored in `config.toml` (by default under the user config
//! directory, e.g. `~/.config/hued/config.toml`):
//!
//! ```toml
//! light_id = "0c7f8a0e-2d7b-4f4b-9b40-1a9c0d5e6f70"
//! brightness_increment = 5
//! stream_brightness = false
//! command_debounce_ms = 500
//! reconnect_delay_secs = 5
//!
//! [bridge]
//! address = "192.168.1.10"
//! application_key = "..."
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "hued";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Step used when `brightness_increment` is missing or zero.
pub const DEFAULT_BRIGHTNESS_INCREMENT: u8 = 5;
/// Default debounce window for brightness writes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
/// Default delay between event stream reconnects.
pub const DEFAULT_RECONNECT_DELAY_SECS: u64 = 5;
/// Reconnect delays below this are raised to it.
pub const MIN_RECONNECT_DELAY_SECS: u64 = 2;

/// Daemon configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bridge connection settings.
    pub bridge: BridgeConfig,
    /// Id of the grouped light to control.
    #[serde(default)]
    pub light_id: String,
    /// Percentage added or removed by `up` / `down`.
    #[serde(default = "default_brightness_increment")]
    pub brightness_increment: u8,
    /// Print `<pct>%` to stdout whenever the brightness changes.
    #[serde(default)]
    pub stream_brightness: bool,
    /// Quiet period before a brightness change is written; 0 writes at once.
    #[serde(default = "default_debounce_ms")]
    pub command_debounce_ms: u64,
    /// Pause between event stream reconnect attempts.
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,
}

/// Bridge connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Bridge host (`192.168.1.10`, `bridge.local:443`) or base URL.
    #[serde(default)]
    pub address: String,
    /// Application key issued by the bridge.
    #[serde(default)]
    pub application_key: String,
}

fn default_brightness_increment() -> u8 {
    DEFAULT_BRIGHTNESS_INCREMENT
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_reconnect_delay_secs() -> u64 {
    DEFAULT_RECONNECT_DELAY_SECS
}

impl Config {
    /// Loads and validates the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validated()
    }

    /// Checks required fields and applies defaults for out-of-range values.
    pub fn validated(mut self) -> Result<Self> {
        self.light_id = self.light_id.trim().to_string();
        if self.light_id.is_empty() {
            return Err(Error::InvalidConfig("light_id is required".to_string()));
        }
        if self.bridge.address.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "bridge.address is required".to_string(),
            ));
        }
        if self.bridge.application_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "bridge.application_key is required".to_string(),
            ));
        }
        if self.brightness_increment == 0 {
            self.brightness_increment = DEFAULT_BRIGHTNESS_INCREMENT;
        }
        self.brightness_increment = self.brightness_increment.min(100);
        self.reconnect_delay_secs = self.reconnect_delay_secs.max(MIN_RECONNECT_DELAY_SECS);
        Ok(self)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.command_debounce_ms)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs)
    }
}

/// Default config location: `<config dir>/hued/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::NoConfigDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
