// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `hued` startup failures. Nothing here reaches a real bridge.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hued() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("hued").unwrap();
    cmd.env_remove("HUED_CONFIG")
        .env_remove("HUED_SOCKET")
        .env_remove("HUED_LOG_FILE")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_flags() {
    hued()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--socket"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn missing_config_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("missing.toml");

    hued()
        .args(["--config", config.to_str().unwrap()])
        .args(["--socket", temp.path().join("hued.sock").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: config not found"));
}

#[test]
fn invalid_config_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "light_id = \"\"\n[bridge]\naddress = \"10.0.0.2\"\napplication_key = \"k\"\n",
    )
    .unwrap();

    hued()
        .env("HUED_CONFIG", &config)
        .args(["--socket", temp.path().join("hued.sock").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("light_id is required"));
}

#[test]
fn unreachable_bridge_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "light_id = \"group-1\"\n[bridge]\naddress = \"http://127.0.0.1:9\"\napplication_key = \"k\"\n",
    )
    .unwrap();
    let socket = temp.path().join("hued.sock");

    hued()
        .args(["--config", config.to_str().unwrap()])
        .args(["--socket", socket.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read grouped light group-1"));

    assert!(!socket.exists());
}
