// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory mirror of one grouped light.
//!
//! The mirror is written by local commands (optimistically) and by the bridge
//! push feed (authoritatively). It keeps a sticky `last_known_brightness` so a
//! plain "on" can restore the level the light had before it was switched off.
//!
//! The mirror itself is not synchronized; the daemon keeps it behind a single
//! lock together with the pending debounce intent.

use crate::light::{clamp_percent, truncate_percent, LightState, LightUpdate, MAX_PERCENT};

/// Brightness reported when the light is on and nothing better is known.
pub const DEFAULT_BRIGHTNESS: f64 = MAX_PERCENT;

/// Snapshot of the controlled grouped light.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMirror {
    device_id: String,
    on: bool,
    brightness: Option<f64>,
    last_known_brightness: f64,
}

impl StateMirror {
    /// Creates a mirror from the initial authoritative read.
    pub fn new(device_id: impl Into<String>, initial: LightState) -> Self {
        let mut mirror = StateMirror {
            device_id: device_id.into(),
            on: initial.on,
            brightness: None,
            last_known_brightness: DEFAULT_BRIGHTNESS,
        };
        if let Some(pct) = initial.brightness {
            mirror.set_brightness(pct);
        }
        mirror
    }

    /// Identifier of the controlled grouped light.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Best-known power state.
    pub fn current_on(&self) -> bool {
        self.on
    }

    /// Live brightness reading, if one is known.
    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    /// Most recent strictly positive brightness ever observed.
    pub fn last_known_brightness(&self) -> f64 {
        self.last_known_brightness
    }

    /// Brightness as shown to users.
    ///
    /// Off reads as 0 regardless of cached values. On without a positive live
    /// reading falls back to the last known brightness, so a light that is on
    /// never reads as 0%. Fractions are truncated.
    pub fn current_brightness_percent(&self) -> u8 {
        if !self.on {
            return 0;
        }
        if let Some(pct) = self.brightness.filter(|pct| *pct > 0.0) {
            return truncate_percent(pct);
        }
        if self.last_known_brightness > 0.0 {
            return truncate_percent(self.last_known_brightness);
        }
        truncate_percent(DEFAULT_BRIGHTNESS)
    }

    /// Brightness a relative adjustment starts from.
    pub fn adjustment_base(&self) -> f64 {
        self.brightness.unwrap_or(self.last_known_brightness)
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Sets the live brightness, clamped to `[0, 100]`.
    ///
    /// A positive value also refreshes the last known brightness.
    pub fn set_brightness(&mut self, pct: f64) {
        let pct = clamp_percent(pct);
        self.brightness = Some(pct);
        self.remember_brightness(pct);
    }

    /// Drops the live brightness reading. The last known brightness is kept.
    pub fn clear_brightness(&mut self) {
        self.brightness = None;
    }

    /// Records `pct` as the last known brightness if it is strictly positive.
    pub fn remember_brightness(&mut self, pct: f64) {
        if pct > 0.0 {
            self.last_known_brightness = clamp_percent(pct);
        }
    }

    /// Applies a partial update; fields that are absent are left untouched.
    pub fn apply(&mut self, update: &LightUpdate) {
        if let Some(pct) = update.brightness {
            self.set_brightness(pct);
        }
        if let Some(on) = update.on {
            self.set_on(on);
        }
    }
}

#[cfg(test)]
#[path = "mirror_tests.rs"]
mod tests;
