// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `huectl` client binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

// =============================================================================
// Help and usage
// =============================================================================

#[test]
fn help_lists_commands() {
    huectl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("down"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("--socket"));
}

#[test]
fn missing_command_is_usage_error() {
    huectl().assert().failure().code(2);
}

#[test]
fn unknown_command_is_usage_error() {
    huectl().arg("dance").assert().failure().code(2);
}

// =============================================================================
// Talking to the daemon
// =============================================================================

#[parameterized(
    toggle = { "toggle", "ok: light toggled, now on" },
    up = { "up", "ok: brightness up to 65%" },
    down = { "down", "ok: brightness down to 55%" },
    status = { "status", "60%" },
)]
fn prints_daemon_reply(command: &str, reply: &'static str) {
    let daemon = FakeDaemon::reply_with(reply);

    huectl()
        .args(["--socket", daemon.socket.to_str().unwrap(), command])
        .assert()
        .success()
        .stdout(format!("{reply}\n"));

    assert_eq!(daemon.received(), command);
}

#[test]
fn socket_from_environment() {
    let daemon = FakeDaemon::reply_with("0%");

    huectl()
        .env("HUED_SOCKET", &daemon.socket)
        .arg("status")
        .assert()
        .success()
        .stdout("0%\n");

    assert_eq!(daemon.received(), "status");
}

#[test]
fn error_reply_exits_nonzero() {
    let daemon =
        FakeDaemon::reply_with("error: brightness adjustments are only permitted when the light is on");

    huectl()
        .args(["--socket", daemon.socket.to_str().unwrap(), "up"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("error: brightness adjustments"));

    daemon.received();
}

#[test]
fn no_daemon_reports_connect_failure() {
    let temp = TempDir::new().unwrap();
    let socket = temp.path().join("absent.sock");

    huectl()
        .args(["--socket", socket.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: failed to connect to daemon:"));
}
