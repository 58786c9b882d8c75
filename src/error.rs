//! Error types for the session boundary.
//!
//! The classification core never fails; only console I/O and
//! configuration loading can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors while loading a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors while running an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
