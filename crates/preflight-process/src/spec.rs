//! Daemon launch specification

use std::collections::HashMap;
use std::path::PathBuf;

/// How the daemon's stdout/stderr are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Share the launcher's terminal, like a shell background job
    Inherit,
    /// Discard all output
    Null,
}

/// Specification for launching a daemon process
#[derive(Debug, Clone)]
pub struct DaemonSpec {
    /// Executable command
    pub command: String,
    /// Command arguments
    pub args: Vec<String>,
    /// Working directory (None = current dir)
    pub working_dir: Option<PathBuf>,
    /// Environment variables (added to parent env)
    pub env: HashMap<String, String>,
    /// stdout/stderr routing
    pub output: OutputMode,
}

impl DaemonSpec {
    /// Create a new daemon specification
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
            working_dir: None,
            env: HashMap::new(),
            output: OutputMode::Inherit,
        }
    }

    /// Set command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Discard daemon output instead of inheriting the terminal
    pub fn silent(mut self) -> Self {
        self.output = OutputMode::Null;
        self
    }
}
