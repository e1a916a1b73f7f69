// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared daemon state handed to every actor.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use hued_core::{Config, StateMirror};
use tokio::sync::{Mutex, MutexGuard};

use crate::bridge::Bridge;
use crate::debounce::PendingBrightness;

/// Runtime knobs derived from the validated config.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Percentage added or removed by `up` / `down`.
    pub brightness_step: f64,
    /// Quiet period before a queued brightness is written.
    pub debounce: Duration,
    /// Print `<pct>%` to stdout on every brightness change.
    pub echo_brightness: bool,
    /// Delay between event stream connection attempts.
    pub reconnect_delay: Duration,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Settings {
            brightness_step: f64::from(config.brightness_increment),
            debounce: config.debounce(),
            echo_brightness: config.stream_brightness,
            reconnect_delay: config.reconnect_delay(),
        }
    }
}

/// Everything guarded by the daemon-wide lock.
#[derive(Debug)]
pub struct Shared {
    pub mirror: StateMirror,
    pub pending: PendingBrightness,
}

/// Handle to the daemon: the locked mirror, the bridge and the settings.
///
/// Cloning is cheap; every clone refers to the same state.
pub struct Daemon<B> {
    shared: Arc<Mutex<Shared>>,
    bridge: Arc<B>,
    settings: Arc<Settings>,
}

impl<B> Clone for Daemon<B> {
    fn clone(&self) -> Self {
        Daemon {
            shared: Arc::clone(&self.shared),
            bridge: Arc::clone(&self.bridge),
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<B: Bridge> Daemon<B> {
    pub fn new(mirror: StateMirror, bridge: B, settings: Settings) -> Self {
        Daemon {
            shared: Arc::new(Mutex::new(Shared {
                mirror,
                pending: PendingBrightness::default(),
            })),
            bridge: Arc::new(bridge),
            settings: Arc::new(settings),
        }
    }

    /// Acquire the daemon-wide lock. Never hold the guard across a bridge call.
    pub async fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().await
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Brightness to echo for the current state, if echo is enabled.
    pub fn echo_percent(&self, shared: &Shared) -> Option<u8> {
        self.settings
            .echo_brightness
            .then(|| shared.mirror.current_brightness_percent())
    }

    /// Print `<pct>%` to stdout. Called after the lock is released.
    pub fn echo_brightness(&self, pct: Option<u8>) {
        if let Some(pct) = pct {
            let _ = write_echo(&mut std::io::stdout().lock(), pct);
        }
    }
}

fn write_echo<W: Write>(out: &mut W, pct: u8) -> std::io::Result<()> {
    writeln!(out, "{}%", pct)?;
    out.flush()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
