//! Settings types and defaults

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Model pulled when `MODEL_NAME` is unset or empty
pub const DEFAULT_MODEL: &str = "granite3.1-moe:1b";

/// Ollama API endpoint used when `OLLAMA_BASE_URL` is unset or empty
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Name of the ollama binary, resolved through PATH
pub const DEFAULT_OLLAMA_BIN: &str = "ollama";

/// Grace period before the first readiness probe, in seconds
pub const DEFAULT_STARTUP_GRACE_SECS: u64 = 5;

/// Total readiness budget, in seconds
pub const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 60;

/// Launcher settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Model identifier to pull (e.g., "granite3.1-moe:1b")
    pub model: String,

    /// Base URL of the Ollama API
    pub base_url: String,

    /// Path or name of the ollama binary
    pub ollama_bin: String,

    /// Daemon startup behavior
    pub startup: StartupSettings,
}

/// Daemon startup behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StartupSettings {
    /// Delay before the first readiness probe, in seconds
    pub grace_secs: u64,

    /// Total time allowed for the daemon to become ready, in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            ollama_bin: DEFAULT_OLLAMA_BIN.to_string(),
            startup: StartupSettings::default(),
        }
    }
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            grace_secs: DEFAULT_STARTUP_GRACE_SECS,
            timeout_secs: DEFAULT_STARTUP_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Validate loaded settings
    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(ConfigError::Validation(
                "Model identifier must not be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "Ollama base URL must not be empty".to_string(),
            ));
        }
        if self.ollama_bin.is_empty() {
            return Err(ConfigError::Validation(
                "Ollama binary name must not be empty".to_string(),
            ));
        }
        if self.startup.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Startup timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl StartupSettings {
    /// Grace period as a duration
    pub fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }

    /// Readiness budget as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
