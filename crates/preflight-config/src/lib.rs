//! Preflight Configuration
//!
//! This crate provides the typed configuration for the preflight launcher:
//! which model to pull, where the Ollama API lives, and how long to wait for
//! the daemon to come up. Settings are loaded from an optional TOML file plus
//! environment variables and validated once at startup.

pub mod error;
pub mod loader;
pub mod settings;

pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use settings::{Settings, StartupSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
