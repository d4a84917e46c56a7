//! Daemon spawning

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::{
    daemon::DaemonHandle,
    error::{ProcessError, Result},
    spec::{DaemonSpec, OutputMode},
};

/// Spawns daemon processes and hands out supervision handles
pub struct Supervisor;

impl Supervisor {
    /// Create new supervisor
    pub fn new() -> Self {
        Self
    }

    /// Spawn a daemon process
    ///
    /// The child is placed in its own process group on Unix so `kill_tree`
    /// reaches any workers the daemon forks. Stdin is closed; stdout/stderr
    /// follow the spec's output mode.
    pub fn spawn(&self, spec: DaemonSpec) -> Result<DaemonHandle> {
        debug!(
            command = %spec.command,
            args = ?spec.args,
            "Spawning daemon"
        );

        let mut cmd = Command::new(&spec.command);
        cmd.args(&spec.args);

        if let Some(ref dir) = spec.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::null());
        match spec.output {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit());
                cmd.stderr(Stdio::inherit());
            }
            OutputMode::Null => {
                cmd.stdout(Stdio::null());
                cmd.stderr(Stdio::null());
            }
        }

        #[cfg(unix)]
        cmd.process_group(0);

        // The daemon must not outlive a launcher that aborts mid-flow
        cmd.kill_on_drop(true);

        let child = cmd.spawn()?;
        let pid = child.id().ok_or_else(|| {
            ProcessError::SpawnFailed(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Failed to get process ID",
            ))
        })?;

        info!(pid = %pid, command = %spec.command, "Daemon spawned");

        Ok(DaemonHandle::new(child, spec))
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_echo() {
        let supervisor = Supervisor::new();
        let spec = DaemonSpec::new("echo").args(["hello"]).silent();

        let daemon = supervisor.spawn(spec).unwrap();
        assert!(daemon.pid() > 0);
    }

    #[tokio::test]
    async fn test_spawn_missing_binary() {
        let supervisor = Supervisor::new();
        let spec = DaemonSpec::new("definitely-not-a-real-binary-1234");

        let result = supervisor.spawn(spec);
        assert!(matches!(result, Err(ProcessError::SpawnFailed(_))));
    }

    #[tokio::test]
    async fn test_shutdown() {
        let supervisor = Supervisor::new();
        let spec = DaemonSpec::new("sleep").args(["10"]).silent();

        let mut daemon = supervisor.spawn(spec).unwrap();
        daemon.shutdown().await.unwrap();
    }
}
