//! Configuration loader implementation

use std::path::PathBuf;

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::Result,
    settings::Settings,
};

/// Environment variable naming the model to pull, kept for compatibility with
/// the original launch scripts.
const MODEL_NAME_VAR: &str = "MODEL_NAME";

/// Environment variable overriding the Ollama API endpoint.
const BASE_URL_VAR: &str = "OLLAMA_BASE_URL";

/// Loads settings from file and environment sources
///
/// Sources, later ones winning: built-in defaults, an optional TOML file
/// (`~/.config/preflight/config.toml` unless overridden), `PREFLIGHT_*`
/// environment variables (`__` separates nested keys), and finally the bare
/// `MODEL_NAME` / `OLLAMA_BASE_URL` variables. An empty bare variable counts
/// as unset.
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "PREFLIGHT".to_string(),
        }
    }

    /// Create a loader with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "PREFLIGHT".to_string(),
        }
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("preflight")
            .join("config.toml")
    }

    /// Load and validate settings
    pub fn load(&self) -> Result<Settings> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).separator("__"));

        let config = builder.build()?;
        let mut settings: Settings = config.try_deserialize()?;

        if let Some(model) = non_empty_env(MODEL_NAME_VAR) {
            debug!(model = %model, "Model overridden by {}", MODEL_NAME_VAR);
            settings.model = model;
        }
        if let Some(url) = non_empty_env(BASE_URL_VAR) {
            debug!(base_url = %url, "Base URL overridden by {}", BASE_URL_VAR);
            settings.base_url = url;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an environment variable, treating unset and empty identically
fn non_empty_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_BASE_URL, DEFAULT_MODEL};
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var(MODEL_NAME_VAR);
        std::env::remove_var(BASE_URL_VAR);
    }

    fn loader_without_file() -> ConfigLoader {
        // A path that does not exist; File::required(false) skips it
        ConfigLoader::with_path(PathBuf::from("/nonexistent/preflight.toml"))
    }

    #[test]
    #[serial]
    fn test_load_defaults_when_env_unset() {
        clear_env();
        let settings = loader_without_file().load().unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_model_name_env_override() {
        clear_env();
        std::env::set_var(MODEL_NAME_VAR, "llama3:8b");
        let settings = loader_without_file().load().unwrap();
        assert_eq!(settings.model, "llama3:8b");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_model_name_falls_back_to_default() {
        clear_env();
        std::env::set_var(MODEL_NAME_VAR, "");
        let settings = loader_without_file().load().unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_base_url_env_override() {
        clear_env();
        std::env::set_var(BASE_URL_VAR, "http://ollama-host:11434");
        let settings = loader_without_file().load().unwrap();
        assert_eq!(settings.base_url, "http://ollama-host:11434");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_toml_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "model = \"mistral:7b\"\n\n[startup]\ngrace_secs = 2\ntimeout_secs = 30"
        )
        .unwrap();

        let settings = ConfigLoader::with_path(path).load().unwrap();
        assert_eq!(settings.model, "mistral:7b");
        assert_eq!(settings.startup.grace_secs, 2);
        assert_eq!(settings.startup.timeout_secs, 30);
        // Unspecified keys keep their defaults
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_env_wins_over_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = \"mistral:7b\"\n").unwrap();

        std::env::set_var(MODEL_NAME_VAR, "llama3:8b");
        let settings = ConfigLoader::with_path(path).load().unwrap();
        assert_eq!(settings.model, "llama3:8b");
        clear_env();
    }
}
