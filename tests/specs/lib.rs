// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `huectl` and `hued` binaries.
//!
//! The spec files are compiled as test targets of the crates that own the
//! binaries (`crates/cli`, `crates/daemon`) so `cargo_bin` can find them.
