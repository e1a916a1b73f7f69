// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_config = { Error::InvalidConfig("light_id is required".into()), "light_id is required" },
    config_not_found = { Error::ConfigNotFound("/etc/hued.toml".into()), "/etc/hued.toml" },
    no_config_dir = { Error::NoConfigDir, "HUED_CONFIG" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn error_from_toml() {
    let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
    let err: Error = toml_err.into();
    assert!(matches!(err, Error::Toml(_)));
}
