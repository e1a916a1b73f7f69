// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hued-core: Shared library for the hued light daemon
//!
//! This crate provides the device state mirror, the push-feed parsers and the
//! configuration model used by the `hued` daemon.

pub mod config;
pub mod error;
pub mod event;
pub mod light;
pub mod mirror;
pub mod sse;

pub use config::{BridgeConfig, Config};
pub use error::{Error, Result};
pub use event::{parse_batch, updates_for, ResourceUpdate};
pub use light::{clamp_percent, round_percent, truncate_percent, LightState, LightUpdate};
pub use mirror::StateMirror;
pub use sse::{SseFramer, SseRecord};
