//! Error types for daemon process management

use std::io;
use thiserror::Error;

/// Daemon process errors
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[from] io::Error),

    /// Failed to kill process
    #[error("Failed to kill process: {0}")]
    KillFailed(String),

    /// Timed out waiting for the process to stop
    #[error("Timed out after {seconds}s waiting for process to stop")]
    ShutdownTimeout { seconds: u64 },
}

/// Result type for process operations
pub type Result<T> = std::result::Result<T, ProcessError>;
