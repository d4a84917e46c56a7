//! Ollama Operations for Preflight
//!
//! This crate is the boundary to the Ollama collaborator. The binary side
//! starts the serving daemon and pulls models through the `ollama` CLI; the
//! API side probes the HTTP endpoint for readiness and lists installed
//! models. The daemon itself is opaque: nothing here parses its output.

pub mod api;
pub mod binary;
pub mod error;
pub mod models;

pub use api::OllamaApi;
pub use binary::OllamaBinary;
pub use error::OllamaError;
pub use models::InstalledModel;

/// Result type for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;
