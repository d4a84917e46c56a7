//! Error types for Ollama operations

use thiserror::Error;

/// Errors that can occur talking to Ollama
#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("Invalid model name: {0}")]
    InvalidModelName(String),

    #[error("Model pull failed for {model}: {reason}")]
    PullFailed { model: String, reason: String },

    #[error("Daemon not ready after {0:?}")]
    NotReady(std::time::Duration),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Process error: {0}")]
    Process(#[from] preflight_process::ProcessError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for OllamaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OllamaError::Timeout(err.to_string())
        } else {
            OllamaError::NetworkError(err.to_string())
        }
    }
}
