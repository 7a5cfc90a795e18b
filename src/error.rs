//! Error types for Moltbot.
//!
//! Wizard operations themselves cannot fail; these cover the process around
//! them (terminal, configuration, logging).

use std::path::PathBuf;

/// Top-level error type
#[derive(Debug, thiserror::Error)]
pub enum MoltbotError {
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Log directory {path} is not usable: {source}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MoltbotError>;
