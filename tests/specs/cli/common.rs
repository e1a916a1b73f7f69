// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: not every spec file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn huectl() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("huectl").unwrap();
    cmd.env_remove("HUED_SOCKET");
    cmd
}

/// A one-shot stand-in for hued: answers a single command with `reply`.
pub struct FakeDaemon {
    pub dir: TempDir,
    pub socket: PathBuf,
    handle: JoinHandle<String>,
}

impl FakeDaemon {
    pub fn reply_with(reply: &'static str) -> Self {
        let dir = TempDir::new().unwrap();
        let socket = dir.path().join("hued.sock");
        let listener = UnixListener::bind(&socket).unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut line = String::new();
            BufReader::new(&stream).read_line(&mut line).unwrap();
            stream.write_all(reply.as_bytes()).unwrap();
            stream.write_all(b"\n").unwrap();
            line
        });
        FakeDaemon {
            dir,
            socket,
            handle,
        }
    }

    /// The command line the client sent, without its newline.
    pub fn received(self) -> String {
        self.handle.join().unwrap().trim_end().to_string()
    }
}
