// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers for `status`, `toggle`, `up` and `down`.

use hued_core::{clamp_percent, round_percent, LightUpdate};
use hued_ipc::{Command, Direction, Reply};

use crate::bridge::{Bridge, BridgeError};
use crate::state::Daemon;

/// Errors reported back to the client as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("brightness adjustments are only permitted when the light is on")]
    LightOff,

    #[error("toggle light: {0}")]
    Toggle(#[from] BridgeError),
}

impl<B: Bridge> Daemon<B> {
    /// Run one command and produce its reply.
    pub async fn execute(&self, command: Command) -> Reply {
        let result = match command {
            Command::Status => Ok(self.status().await),
            Command::Toggle => self.toggle().await,
            Command::Adjust(direction) => self.adjust(direction).await,
        };

        result.unwrap_or_else(|e| {
            tracing::info!(command = %command, "command failed: {}", e);
            Reply::error(e.to_string())
        })
    }

    /// Report the mirrored brightness. Never touches the bridge.
    pub async fn status(&self) -> Reply {
        let shared = self.lock().await;
        Reply::Brightness(shared.mirror.current_brightness_percent())
    }

    /// Flip the power state, restoring the remembered brightness when turning on.
    pub async fn toggle(&self) -> Result<Reply, CommandError> {
        let (device_id, on, update) = {
            let mut shared = self.lock().await;
            shared.pending.cancel();

            let on = !shared.mirror.current_on();
            let restore = on.then(|| shared.mirror.last_known_brightness());
            (
                shared.mirror.device_id().to_string(),
                on,
                LightUpdate::power(on).with_brightness(restore),
            )
        };

        self.bridge()
            .write_grouped_light(&device_id, update)
            .await?;

        let mut shared = self.lock().await;
        if on {
            shared.mirror.apply(&update);
        } else {
            if let Some(pct) = shared.mirror.brightness() {
                shared.mirror.remember_brightness(pct);
            }
            shared.mirror.clear_brightness();
            shared.mirror.set_on(false);
        }
        tracing::info!(on, "light toggled");
        let echo = self.echo_percent(&shared);
        drop(shared);
        self.echo_brightness(echo);

        Ok(Reply::Toggled { on })
    }

    /// Step the brightness locally and queue the debounced write.
    pub async fn adjust(&self, direction: Direction) -> Result<Reply, CommandError> {
        let mut guard = self.lock().await;
        let shared = &mut *guard;

        if !shared.mirror.current_on() {
            return Err(CommandError::LightOff);
        }

        let step = direction.sign() * self.settings().brightness_step;
        let target = clamp_percent(shared.mirror.adjustment_base() + step);
        shared.mirror.set_brightness(target);
        self.queue_brightness(shared, target);
        let echo = self.echo_percent(shared);
        drop(guard);
        self.echo_brightness(echo);

        Ok(Reply::Adjusted {
            direction,
            percent: round_percent(target),
        })
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
