//! Invocations of the ollama binary
//!
//! The binary is an opaque collaborator with two operations: `serve` starts
//! the long-running daemon, `pull` fetches one model and blocks until done.
//! Pull output is the binary's own progress display, inherited to the
//! terminal.

use std::process::Stdio;

use preflight_process::{DaemonHandle, DaemonSpec, Supervisor};
use tokio::process::Command;
use tracing::{debug, info};

use crate::{error::OllamaError, Result};

/// The ollama CLI collaborator
pub struct OllamaBinary {
    bin: String,
    supervisor: Supervisor,
}

impl OllamaBinary {
    /// Create a wrapper around the given binary name or path
    pub fn new(bin: impl Into<String>) -> Result<Self> {
        let bin = bin.into();
        if bin.is_empty() {
            return Err(OllamaError::ConfigError(
                "Ollama binary name is required".to_string(),
            ));
        }
        Ok(Self {
            bin,
            supervisor: Supervisor::new(),
        })
    }

    /// Binary name or path
    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Start the serving daemon in the background
    ///
    /// Equivalent of `ollama serve &`. The handle is the only link the
    /// launcher keeps to the daemon; its output goes straight to the
    /// terminal.
    pub fn serve(&self) -> Result<DaemonHandle> {
        info!(bin = %self.bin, "Starting Ollama daemon");
        let spec = DaemonSpec::new(&self.bin).args(["serve"]);
        Ok(self.supervisor.spawn(spec)?)
    }

    /// Pull a model, blocking until the binary exits
    ///
    /// Non-zero exit becomes `PullFailed`; a spawn failure (binary missing)
    /// is an IO error.
    pub async fn pull(&self, model: &str) -> Result<()> {
        if model.is_empty() {
            return Err(OllamaError::InvalidModelName(
                "Model name cannot be empty".to_string(),
            ));
        }

        info!(model = %model, "Pulling model");
        debug!(bin = %self.bin, model = %model, "Running pull subcommand");

        let status = Command::new(&self.bin)
            .args(["pull", model])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if !status.success() {
            return Err(OllamaError::PullFailed {
                model: model.to_string(),
                reason: match status.code() {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated by signal".to_string(),
                },
            });
        }

        info!(model = %model, "Model pulled");
        Ok(())
    }
}
