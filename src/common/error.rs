//! Error types for the test launcher
//!
//! Declined confirmations are not errors; they travel up as
//! [`crate::cli::Outcome::Cancelled`]. Everything here ends the session
//! with exit code 1.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum Error {
    // === Platform Errors ===
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    // === Installation Errors ===
    #[error("Failed to download install script from {url}: {reason}")]
    ScriptDownload { url: String, reason: String },

    #[error("Failed to run '{command}': {error}")]
    CommandSpawn { command: String, error: String },

    // === Input Errors ===
    #[error("Standard input closed while waiting for an answer")]
    InputClosed,

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a command spawn error from the rendered command line
    pub fn command_spawn(command: &str, error: &io::Error) -> Self {
        Self::CommandSpawn {
            command: command.to_string(),
            error: error.to_string(),
        }
    }

    /// Create a script download error
    pub fn script_download(url: &str, reason: impl ToString) -> Self {
        Self::ScriptDownload {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
