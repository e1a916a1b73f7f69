// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup plumbing: single-instance lock and socket setup.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tokio::net::UnixListener;

use crate::bridge::BridgeError;

/// Suffix appended to the socket path for the instance lock file.
const LOCK_SUFFIX: &str = ".lock";
/// Socket file permissions: owner read/write only.
const SOCKET_MODE: u32 = 0o600;

/// Failures that stop the daemon before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] hued_core::Error),

    #[error("another hued instance is already running (lock: {0})")]
    AlreadyRunning(String),

    #[error("failed to open lock file {path}: {source}")]
    Lock {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read grouped light {id}: {source}")]
    InitialState {
        id: String,
        #[source]
        source: BridgeError,
    },

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("failed to bind socket {path}: {source}")]
    Bind {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lock file guarding `socket_path`.
pub fn lock_path(socket_path: &Path) -> PathBuf {
    let mut path = socket_path.as_os_str().to_owned();
    path.push(LOCK_SUFFIX);
    PathBuf::from(path)
}

/// Take the exclusive instance lock. Held until the returned file is dropped.
pub fn acquire_lock(lock_path: &Path) -> Result<fs::File, StartupError> {
    use fs2::FileExt;

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(lock_path)
        .map_err(|source| StartupError::Lock {
            path: lock_path.display().to_string(),
            source,
        })?;
    file.try_lock_exclusive()
        .map_err(|_| StartupError::AlreadyRunning(lock_path.display().to_string()))?;
    Ok(file)
}

/// Replace any stale socket file, bind, and restrict access to the owner.
pub fn bind_socket(socket_path: &Path) -> Result<UnixListener, StartupError> {
    let bind_error = |source: std::io::Error| StartupError::Bind {
        path: socket_path.display().to_string(),
        source,
    };

    match fs::remove_file(socket_path) {
        Ok(()) => tracing::debug!("removed stale socket {}", socket_path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(bind_error(e)),
    }

    let listener = UnixListener::bind(socket_path).map_err(bind_error)?;
    fs::set_permissions(socket_path, fs::Permissions::from_mode(SOCKET_MODE))
        .map_err(bind_error)?;
    Ok(listener)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
