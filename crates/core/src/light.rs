// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouped light state as exchanged with the bridge.
//!
//! Brightness is a percentage carried as `f64` because the bridge reports
//! fractional levels (e.g. `39.37`). An absent brightness means "no
//! information", never zero.

/// Lowest brightness percentage.
pub const MIN_PERCENT: f64 = 0.0;
/// Highest brightness percentage.
pub const MAX_PERCENT: f64 = 100.0;

/// Authoritative state of a grouped light as read from the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightState {
    /// Power state.
    pub on: bool,
    /// Brightness percentage, if the bridge reported one.
    pub brightness: Option<f64>,
}

impl LightState {
    pub fn new(on: bool, brightness: Option<f64>) -> Self {
        LightState { on, brightness }
    }
}

/// A partial change to a grouped light.
///
/// Used both for outbound writes and for updates reported by the push feed.
/// Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightUpdate {
    /// New power state.
    pub on: Option<bool>,
    /// New brightness percentage.
    pub brightness: Option<f64>,
}

impl LightUpdate {
    /// A power-only update.
    pub fn power(on: bool) -> Self {
        LightUpdate {
            on: Some(on),
            brightness: None,
        }
    }

    /// A brightness-only update.
    pub fn brightness(pct: f64) -> Self {
        LightUpdate {
            on: None,
            brightness: Some(pct),
        }
    }

    /// Adds a brightness to this update.
    pub fn with_brightness(mut self, pct: Option<f64>) -> Self {
        self.brightness = pct;
        self
    }

    /// Returns true if the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self.on.is_none() && self.brightness.is_none()
    }
}

/// Clamps a brightness percentage to `[0, 100]`.
///
/// NaN is treated as zero.
pub fn clamp_percent(pct: f64) -> f64 {
    if pct.is_nan() {
        return MIN_PERCENT;
    }
    pct.clamp(MIN_PERCENT, MAX_PERCENT)
}

/// Rounds a brightness percentage to the whole number shown to users.
pub fn round_percent(pct: f64) -> u8 {
    // clamp_percent bounds the value to 0..=100, so the cast cannot truncate
    clamp_percent(pct).round() as u8
}

/// Drops the fractional part of a brightness percentage.
pub fn truncate_percent(pct: f64) -> u8 {
    clamp_percent(pct).trunc() as u8
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
