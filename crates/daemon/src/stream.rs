// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event stream consumer.
//!
//! Keeps the mirror in sync with the bridge's push feed, reconnecting after
//! any failure and resuming from the last seen event id.

use hued_core::{parse_batch, updates_for, SseFramer, SseRecord};
use tokio::io::AsyncBufReadExt;

use crate::bridge::{Bridge, BridgeError, EventLines};
use crate::state::Daemon;

/// Where the consumer is in its connection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    /// Opening the stream; `attempt` counts consecutive tries.
    Connecting { attempt: u32 },
    /// Reading events from an open stream.
    Streaming,
}

/// Why a streaming session ended.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("connect to event stream: {0}")]
    Connect(#[from] BridgeError),

    #[error("read event stream: {0}")]
    Read(#[from] std::io::Error),

    #[error("event stream closed by bridge")]
    Closed,
}

pub struct EventStreamConsumer<B> {
    daemon: Daemon<B>,
    last_event_id: Option<String>,
    state: ConsumerState,
}

impl<B: Bridge> EventStreamConsumer<B> {
    pub fn new(daemon: Daemon<B>) -> Self {
        EventStreamConsumer {
            daemon,
            last_event_id: None,
            state: ConsumerState::Connecting { attempt: 1 },
        }
    }

    pub fn state(&self) -> ConsumerState {
        self.state
    }

    pub fn last_event_id(&self) -> Option<&str> {
        self.last_event_id.as_deref()
    }

    /// Consume the stream for the lifetime of the process.
    pub async fn run(mut self) {
        let delay = self.daemon.settings().reconnect_delay;

        loop {
            let err = self.run_session().await;

            let attempt = match self.state() {
                ConsumerState::Streaming => {
                    tracing::warn!("event stream lost: {}", err);
                    1
                }
                ConsumerState::Connecting { attempt } => {
                    tracing::warn!(attempt, "event stream unavailable: {}", err);
                    attempt.saturating_add(1)
                }
            };
            self.state = ConsumerState::Connecting { attempt };

            tracing::info!(
                resume = ?self.last_event_id(),
                "reconnecting to event stream in {:?}",
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Connect once and process events until the stream fails.
    pub async fn run_session(&mut self) -> StreamError {
        let lines = match self
            .daemon
            .bridge()
            .open_event_stream(self.last_event_id.as_deref())
            .await
        {
            Ok(lines) => lines,
            Err(e) => return StreamError::Connect(e),
        };

        self.state = ConsumerState::Streaming;
        tracing::info!(resume = ?self.last_event_id, "event stream connected");
        let echo = self.daemon.echo_percent(&*self.daemon.lock().await);
        self.daemon.echo_brightness(echo);

        self.consume(lines).await
    }

    async fn consume(&mut self, mut lines: EventLines) -> StreamError {
        let mut framer = SseFramer::new();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            match lines.read_until(b'\n', &mut raw).await {
                Ok(0) => return StreamError::Closed,
                Ok(_) => {}
                Err(e) => return StreamError::Read(e),
            }

            // Invalid UTF-8 surfaces as a malformed payload, not a read error.
            let line = String::from_utf8_lossy(&raw);
            match framer.push_line(&line) {
                Some(SseRecord::EventId(id)) => self.last_event_id = id,
                Some(SseRecord::Payload(payload)) => self.apply_payload(&payload).await,
                None => {}
            }
        }
    }

    async fn apply_payload(&self, payload: &str) {
        let records = match parse_batch(payload) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("skipping malformed event payload: {}", e);
                return;
            }
        };

        let mut shared = self.daemon.lock().await;
        let updates = updates_for(&records, shared.mirror.device_id());
        if updates.is_empty() {
            return;
        }

        for update in &updates {
            shared.mirror.apply(update);
        }
        tracing::debug!(
            on = shared.mirror.current_on(),
            brightness = ?shared.mirror.brightness(),
            "applied bridge update"
        );
        let echo = self.daemon.echo_percent(&shared);
        drop(shared);
        self.daemon.echo_brightness(echo);
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
