//! Handle to a running daemon process

use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::Child;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::{
    error::{ProcessError, Result},
    spec::DaemonSpec,
};

/// SIGTERM to SIGKILL escalation delay
const SIGKILL_TIMEOUT_MS: u64 = 200;

/// Bounded wait when reaping a killed daemon
const REAP_TIMEOUT_SECS: u64 = 5;

/// Wrapper around tokio::process::Child with daemon lifecycle management
pub struct DaemonHandle {
    /// Underlying tokio child process
    child: Child,
    /// Launch specification
    spec: DaemonSpec,
    /// Process ID
    pid: u32,
}

impl DaemonHandle {
    /// Create new daemon handle
    pub(crate) fn new(child: Child, spec: DaemonSpec) -> Self {
        let pid = child.id().unwrap_or(0);
        Self { child, spec, pid }
    }

    /// Get process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get the launch specification
    pub fn spec(&self) -> &DaemonSpec {
        &self.spec
    }

    /// Check if the daemon is still running
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Check for an exit status without blocking
    pub fn try_status(&mut self) -> Option<ExitStatus> {
        self.child.try_wait().ok().flatten()
    }

    /// Block until the daemon exits
    ///
    /// This is the supervision primitive: on the success path the launcher
    /// sits here for the daemon's whole lifetime.
    pub async fn wait(&mut self) -> Result<ExitStatus> {
        self.child.wait().await.map_err(Into::into)
    }

    /// Stop the daemon and reap it
    ///
    /// Kills the process and waits a bounded time for it to be reaped.
    pub async fn shutdown(&mut self) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }

        debug!(pid = %self.pid, "Shutting down daemon");

        if let Err(e) = self.child.kill().await {
            warn!(pid = %self.pid, error = %e, "Failed to kill daemon");
            return Err(ProcessError::KillFailed(e.to_string()));
        }

        let timeout = Duration::from_secs(REAP_TIMEOUT_SECS);
        match tokio::time::timeout(timeout, self.child.wait()).await {
            Ok(Ok(_)) => {
                debug!(pid = %self.pid, "Daemon shut down");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(pid = %self.pid, error = %e, "Error waiting for daemon");
                Err(ProcessError::KillFailed(e.to_string()))
            }
            Err(_) => {
                warn!(pid = %self.pid, "Timeout waiting for daemon to exit");
                Err(ProcessError::ShutdownTimeout {
                    seconds: timeout.as_secs(),
                })
            }
        }
    }

    /// Kill the daemon and all its descendants
    ///
    /// - Windows: `taskkill /pid <pid> /f /t`
    /// - Unix: signals the process group, SIGTERM then SIGKILL
    pub async fn kill_tree(&mut self) -> Result<()> {
        debug!(pid = %self.pid, "Killing daemon process tree");

        #[cfg(windows)]
        {
            use tokio::process::Command;

            let mut killer = Command::new("taskkill")
                .args(["/pid", &self.pid.to_string(), "/f", "/t"])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .map_err(|e| ProcessError::KillFailed(e.to_string()))?;

            let _ = killer.wait().await;
            let _ = self.child.wait().await;
            return Ok(());
        }

        #[cfg(unix)]
        {
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;

            let pgid = Pid::from_raw(self.pid as i32);

            match killpg(pgid, Signal::SIGTERM) {
                Ok(_) => debug!(pid = %self.pid, "Sent SIGTERM to process group"),
                Err(e) => {
                    warn!(pid = %self.pid, error = %e, "Failed to send SIGTERM, trying process only");
                    let _ = self.child.kill().await;
                }
            }

            sleep(Duration::from_millis(SIGKILL_TIMEOUT_MS)).await;

            match killpg(pgid, Signal::SIGKILL) {
                Ok(_) => debug!(pid = %self.pid, "Sent SIGKILL to process group"),
                Err(e) => {
                    // ESRCH means the group is already gone
                    debug!(pid = %self.pid, error = %e, "SIGKILL not delivered");
                    let _ = self.child.kill().await;
                }
            }

            let _ = self.child.wait().await;
        }

        #[allow(unreachable_code)]
        Ok(())
    }
}
