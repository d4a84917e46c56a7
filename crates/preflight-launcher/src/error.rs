//! Error types for launch orchestration

use std::process::ExitStatus;

use thiserror::Error;

/// Launch orchestration errors
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The daemon exited before or during startup instead of serving
    #[error("Daemon exited during startup with {status}")]
    DaemonExited { status: ExitStatus },

    /// The daemon exited with a failure status while supervised
    #[error("Daemon failed with {status}")]
    DaemonFailed { status: ExitStatus },

    #[error(transparent)]
    Config(#[from] preflight_config::ConfigError),

    #[error(transparent)]
    Ollama(#[from] preflight_ollama::OllamaError),

    #[error(transparent)]
    Process(#[from] preflight_process::ProcessError),
}

/// Result type for launch operations
pub type Result<T> = std::result::Result<T, LaunchError>;
