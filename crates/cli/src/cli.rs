// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hued_ipc::{Command, Direction};

#[derive(Parser, Debug)]
#[command(name = "huectl", version, about = "Control the light managed by hued")]
pub struct Cli {
    /// Daemon socket (default: $HUED_SOCKET, then $XDG_RUNTIME_DIR/hued-<uid>.sock)
    #[arg(long, global = true, value_name = "PATH")]
    pub socket: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Action,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn the light on or off
    Toggle,
    /// Raise the brightness by one step
    Up,
    /// Lower the brightness by one step
    Down,
    /// Print the current brightness percentage
    Status,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Toggle => Command::Toggle,
            Action::Up => Command::Adjust(Direction::Up),
            Action::Down => Command::Adjust(Direction::Down),
            Action::Status => Command::Status,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
