//! Error types for watchandlisten.

use thiserror::Error;

/// Main error type for hook lookup and execution.
#[derive(Debug, Error)]
pub enum WatchError {
    /// No hook is registered at the requested path
    #[error("No hook registered for {0}")]
    UnknownHook(String),

    /// The command could not be spawned or exited unsuccessfully
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// I/O error (spawning the shell, reading its output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
