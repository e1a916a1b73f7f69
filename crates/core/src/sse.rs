// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server-sent events framing.
//!
//! The bridge push feed is a `text/event-stream` response. Lines are fed in
//! one at a time; `id:` lines report the resume position immediately, `data:`
//! lines accumulate, and a blank line completes the current event.
//!
//! ```text
//! id: 1700000000:0
//! data: [{"type":"update","data":[...]}]
//!
//! ```
//!
//! `event:`, `retry:` and comment lines carry nothing the daemon needs and are
//! skipped.

const ID_PREFIX: &str = "id:";
const DATA_PREFIX: &str = "data:";

/// A complete record produced by [`SseFramer::push_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseRecord {
    /// The stream reported a new resume position. `None` for an empty id.
    EventId(Option<String>),
    /// A blank line completed an event; the data lines joined with `\n`.
    Payload(String),
}

/// Incremental SSE line framer.
#[derive(Debug, Default)]
pub struct SseFramer {
    data: Vec<String>,
}

impl SseFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (with or without its trailing newline).
    pub fn push_line(&mut self, line: &str) -> Option<SseRecord> {
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');

        if line.is_empty() {
            if self.data.is_empty() {
                return None;
            }
            let payload = self.data.join("\n");
            self.data.clear();
            return Some(SseRecord::Payload(payload));
        }

        if let Some(id) = line.strip_prefix(ID_PREFIX) {
            let id = id.trim();
            return Some(SseRecord::EventId(
                (!id.is_empty()).then(|| id.to_string()),
            ));
        }

        if let Some(data) = line.strip_prefix(DATA_PREFIX) {
            self.data.push(data.trim().to_string());
        }
        None
    }

    /// Number of data lines waiting for the event boundary.
    pub fn pending_lines(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod tests;
