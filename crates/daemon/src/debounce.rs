// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coalescing of rapid brightness commands into a single bridge write.
//!
//! Each `up`/`down` records its target and restarts the timer. When the timer
//! fires the last recorded target is written once. A toggle cancels both.

use hued_core::LightUpdate;
use tokio::task::JoinHandle;

use crate::bridge::Bridge;
use crate::state::{Daemon, Shared};

/// Brightness intent waiting for the debounce window to elapse.
#[derive(Debug, Default)]
pub struct PendingBrightness {
    target: Option<f64>,
    timer: Option<JoinHandle<()>>,
}

impl PendingBrightness {
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Record a new target and timer, aborting the previous timer.
    pub fn replace(&mut self, target: f64, timer: JoinHandle<()>) {
        self.cancel();
        self.target = Some(target);
        self.timer = Some(timer);
    }

    /// Abort the timer and discard the target.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.target = None;
    }

    /// Take the target for flushing. The running timer is released, not aborted.
    pub fn take(&mut self) -> Option<f64> {
        self.timer = None;
        self.target.take()
    }
}

impl<B: Bridge> Daemon<B> {
    /// Queue `target` to be written once the debounce window passes quietly.
    ///
    /// The caller holds the lock; the spawned flush waits for it.
    pub fn queue_brightness(&self, shared: &mut Shared, target: f64) {
        let daemon = self.clone();
        let delay = self.settings().debounce;

        let timer = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            daemon.flush_pending_brightness().await;
        });

        if let Some(previous) = shared.pending.target() {
            tracing::debug!(previous, target, "replacing pending brightness");
        }
        shared.pending.replace(target, timer);
    }

    /// Write the pending brightness, if any. Failures are logged only.
    pub async fn flush_pending_brightness(&self) {
        let (device_id, target) = {
            let mut shared = self.lock().await;
            let Some(target) = shared.pending.take() else {
                return;
            };
            (shared.mirror.device_id().to_string(), target)
        };

        if device_id.is_empty() {
            return;
        }

        tracing::debug!(brightness = target, "flushing brightness");
        if let Err(e) = self
            .bridge()
            .write_grouped_light(&device_id, LightUpdate::brightness(target))
            .await
        {
            tracing::warn!("failed to write brightness {:.1}%: {}", target, e);
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
