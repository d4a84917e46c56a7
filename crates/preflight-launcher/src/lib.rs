//! Launch Orchestration for Preflight
//!
//! Ties the other crates into the bootstrap flow: start the Ollama daemon,
//! wait until it answers health checks, pull the configured model, then
//! supervise the daemon until it exits or the user interrupts. Every step is
//! fail-fast; a failure anywhere shuts the daemon down and propagates.

pub mod error;
pub mod launcher;

pub use error::{LaunchError, Result};
pub use launcher::Launcher;
