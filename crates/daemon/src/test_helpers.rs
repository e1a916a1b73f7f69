// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted bridge and daemon builders shared by the unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use hued_core::{LightState, LightUpdate};

use crate::bridge::{Bridge, BridgeError, BridgeFuture, BridgeResult, EventLines};
use crate::state::{Daemon, Settings};

pub const DEVICE_ID: &str = "group-1";
pub const DEBOUNCE: Duration = Duration::from_millis(500);
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// In-memory bridge that records writes and serves scripted event streams.
///
/// Once the scripted streams are used up, `open_event_stream` never resolves,
/// parking the consumer so tests can inspect what happened.
#[derive(Default)]
pub struct MockBridge {
    state: Mutex<LightState>,
    writes: Mutex<Vec<(String, LightUpdate)>>,
    fail_writes: AtomicBool,
    streams: Mutex<VecDeque<BridgeResult<Vec<u8>>>>,
    resume_hints: Mutex<Vec<Option<String>>>,
    reads: AtomicUsize,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a status error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Queue a stream body served by the next `open_event_stream`.
    pub fn push_stream(&self, body: impl Into<String>) {
        self.push_stream_bytes(body.into().into_bytes());
    }

    /// Queue a raw stream body, which need not be valid UTF-8.
    pub fn push_stream_bytes(&self, body: Vec<u8>) {
        self.streams.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a connection failure for the next `open_event_stream`.
    pub fn push_stream_error(&self, error: BridgeError) {
        self.streams.lock().unwrap().push_back(Err(error));
    }

    pub fn writes(&self) -> Vec<(String, LightUpdate)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn resume_hints(&self) -> Vec<Option<String>> {
        self.resume_hints.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Bridge for MockBridge {
    fn read_grouped_light(&self, _id: &str) -> BridgeFuture<'_, LightState> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let state = *self.state.lock().unwrap();
        Box::pin(async move { Ok(state) })
    }

    fn write_grouped_light(&self, id: &str, update: LightUpdate) -> BridgeFuture<'_, ()> {
        let result = if self.fail_writes.load(Ordering::SeqCst) {
            Err(BridgeError::Status {
                status: 503,
                body: "bridge busy".to_string(),
            })
        } else {
            self.writes.lock().unwrap().push((id.to_string(), update));
            Ok(())
        };
        Box::pin(async move { result })
    }

    fn open_event_stream(&self, last_event_id: Option<&str>) -> BridgeFuture<'_, EventLines> {
        self.resume_hints
            .lock()
            .unwrap()
            .push(last_event_id.map(str::to_string));
        let next = self.streams.lock().unwrap().pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(body)) => {
                    let lines: EventLines = Box::new(std::io::Cursor::new(body));
                    Ok(lines)
                }
                Some(Err(e)) => Err(e),
                None => std::future::pending().await,
            }
        })
    }
}

/// Settings used by most tests: step 5, 500 ms debounce, no echo.
pub fn settings() -> Settings {
    Settings {
        brightness_step: 5.0,
        debounce: DEBOUNCE,
        echo_brightness: false,
        reconnect_delay: RECONNECT_DELAY,
    }
}

/// Build a daemon around a fresh mock bridge.
pub fn daemon(initial: LightState) -> Daemon<MockBridge> {
    daemon_with(MockBridge::new(), initial, settings())
}

pub fn daemon_with(bridge: MockBridge, initial: LightState, settings: Settings) -> Daemon<MockBridge> {
    Daemon::new(
        hued_core::StateMirror::new(DEVICE_ID, initial),
        bridge,
        settings,
    )
}
