// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use hued_core::{Config, LightState};

use super::*;
use crate::test_helpers::{daemon, DEVICE_ID};

const CONFIG: &str = r#"
light_id = "group-1"
brightness_increment = 10
stream_brightness = true
command_debounce_ms = 250
reconnect_delay_secs = 7

[bridge]
address = "10.0.0.2"
application_key = "key"
"#;

#[test]
fn settings_from_config() {
    let config = Config::from_toml(CONFIG).unwrap();
    let settings = Settings::from_config(&config);

    assert_eq!(
        settings,
        Settings {
            brightness_step: 10.0,
            debounce: Duration::from_millis(250),
            echo_brightness: true,
            reconnect_delay: Duration::from_secs(7),
        }
    );
}

#[tokio::test]
async fn clones_share_one_mirror() {
    let first = daemon(LightState::new(true, Some(40.0)));
    let second = first.clone();

    first.lock().await.mirror.set_brightness(80.0);

    let shared = second.lock().await;
    assert_eq!(shared.mirror.device_id(), DEVICE_ID);
    assert_eq!(shared.mirror.current_brightness_percent(), 80);
    assert!(shared.pending.target().is_none());
}

#[tokio::test]
async fn echo_percent_respects_setting() {
    let quiet = daemon(LightState::new(true, Some(40.0)));
    assert_eq!(quiet.echo_percent(&*quiet.lock().await), None);

    let mut loud_settings = crate::test_helpers::settings();
    loud_settings.echo_brightness = true;
    let loud = crate::test_helpers::daemon_with(
        crate::test_helpers::MockBridge::new(),
        LightState::new(true, Some(40.7)),
        loud_settings,
    );
    assert_eq!(loud.echo_percent(&*loud.lock().await), Some(40));
}

#[test]
fn echo_line_format() {
    let mut out = Vec::new();
    write_echo(&mut out, 65).unwrap();
    assert_eq!(out, b"65%\n");
}
