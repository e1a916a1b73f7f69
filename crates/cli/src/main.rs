// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use huectl::Cli;

fn main() {
    let cli = Cli::parse();
    match huectl::run(cli) {
        Ok(reply) => {
            println!("{}", reply);
            if hued_ipc::is_error_line(&reply) {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
