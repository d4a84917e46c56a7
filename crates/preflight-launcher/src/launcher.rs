//! The bootstrap flow: serve, wait, pull, supervise

use preflight_config::Settings;
use preflight_ollama::{OllamaApi, OllamaBinary};
use preflight_process::DaemonHandle;
use tracing::{info, warn};

use crate::error::{LaunchError, Result};

/// Runs the bootstrap flow against one Ollama daemon
pub struct Launcher {
    settings: Settings,
    binary: OllamaBinary,
    api: OllamaApi,
}

impl Launcher {
    /// Create a launcher from validated settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let binary = OllamaBinary::new(&settings.ollama_bin)?;
        let api = OllamaApi::new(&settings.base_url)?;
        Ok(Self {
            settings,
            binary,
            api,
        })
    }

    /// Settings this launcher runs with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the whole flow
    ///
    /// Starts the daemon, waits for readiness, pulls the configured model,
    /// then blocks supervising the daemon. On the success path this returns
    /// only once the daemon exits or the user interrupts. Any startup or pull
    /// failure tears the daemon down before propagating.
    pub async fn run(&self) -> Result<()> {
        let mut daemon = self.binary.serve()?;

        if let Err(e) = self.await_ready_and_pull(&mut daemon).await {
            warn!(error = %e, "Startup failed, stopping daemon");
            let _ = daemon.kill_tree().await;
            return Err(e);
        }

        self.supervise(daemon).await
    }

    /// Readiness wait and model pull, racing against an early daemon death
    ///
    /// A daemon that exits before answering health checks is a serve failure:
    /// the pull must not run (its status, even zero, means nothing is
    /// serving).
    async fn await_ready_and_pull(&self, daemon: &mut DaemonHandle) -> Result<()> {
        let startup = &self.settings.startup;

        tokio::select! {
            status = daemon.wait() => {
                let status = status?;
                return Err(LaunchError::DaemonExited { status });
            }
            ready = self.api.wait_ready(startup.grace(), startup.timeout()) => ready?,
        }

        self.binary.pull(&self.settings.model).await?;
        Ok(())
    }

    /// Block on the daemon until it exits or the user interrupts
    async fn supervise(&self, mut daemon: DaemonHandle) -> Result<()> {
        info!(pid = daemon.pid(), "Supervising daemon, Ctrl-C to stop");

        tokio::select! {
            status = daemon.wait() => {
                let status = status?;
                if status.success() {
                    info!("Daemon exited cleanly");
                    Ok(())
                } else {
                    Err(LaunchError::DaemonFailed { status })
                }
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    warn!(error = %e, "Failed to listen for interrupt");
                }
                info!("Interrupt received, stopping daemon");
                daemon.kill_tree().await?;
                Ok(())
            }
        }
    }
}
