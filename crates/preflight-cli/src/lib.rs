//! Preflight CLI
//!
//! Command parsing and dispatch for the `preflight` binary.

pub mod commands;
pub mod logging;
pub mod router;
