// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hued - keeps a Hue grouped light in sync and serves local commands.
//!
//! Mirrors the light's power and brightness from the bridge's event stream
//! and listens on a Unix socket for `status`, `toggle`, `up` and `down`
//! from `huectl`.
//!
//! Usage:
//!   hued [--config <path>] [--socket <path>] [--log-file <path>]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hued_core::{Config, StateMirror};

mod bridge;
mod commands;
mod debounce;
mod env;
mod lifecycle;
mod server;
mod state;
mod stream;

#[cfg(test)]
mod test_helpers;

use bridge::{Bridge, HueBridge};
use lifecycle::StartupError;
use state::{Daemon, Settings};
use stream::EventStreamConsumer;

#[derive(Parser, Debug)]
#[command(name = "hued", version, about = "Hue grouped light sync daemon")]
struct Args {
    /// Config file (default: $HUED_CONFIG, then <config dir>/hued/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command socket (default: $HUED_SOCKET, then $XDG_RUNTIME_DIR/hued-<uid>.sock)
    #[arg(long, value_name = "PATH")]
    socket: Option<PathBuf>,

    /// Append logs to this file instead of stderr (default: $HUED_LOG_FILE)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_file = args.log_file.clone().or_else(env::log_file);
    setup_logging(log_file.as_deref());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), StartupError> {
    let config_path = match args.config.or_else(env::config_path) {
        Some(path) => path,
        None => hued_core::config::default_config_path()?,
    };
    let config = Config::load(&config_path)?;
    tracing::info!("hued starting, config={}", config_path.display());

    let socket_path = args.socket.unwrap_or_else(hued_ipc::socket_path);
    let _lock = lifecycle::acquire_lock(&lifecycle::lock_path(&socket_path))?;

    let bridge = HueBridge::new(&config.bridge)?;
    let initial = bridge
        .read_grouped_light(&config.light_id)
        .await
        .map_err(|source| StartupError::InitialState {
            id: config.light_id.clone(),
            source,
        })?;
    tracing::info!(
        light = %config.light_id,
        on = initial.on,
        brightness = ?initial.brightness,
        "initial light state"
    );

    let daemon = Daemon::new(
        StateMirror::new(config.light_id.clone(), initial),
        bridge,
        Settings::from_config(&config),
    );

    tokio::spawn(EventStreamConsumer::new(daemon.clone()).run());

    let listener = lifecycle::bind_socket(&socket_path)?;
    tracing::info!("listening on {}", socket_path.display());

    server::run(listener, daemon).await;
    Ok(())
}

fn setup_logging(log_path: Option<&Path>) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(env::names::RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = log_path.and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    // Stdout carries the brightness echo, so logs never go there.
    if let Some(file) = file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
