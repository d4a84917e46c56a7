//! # preflight-process
//!
//! **Purpose**: Daemon process lifecycle primitives for preflight
//!
//! Provides async spawning of a long-running daemon, PID tracking, a blocking
//! wait (the supervision primitive), graceful shutdown with a bounded reap,
//! and process-group tree kill on Unix.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use preflight_process::{DaemonSpec, Supervisor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let supervisor = Supervisor::new();
//! let spec = DaemonSpec::new("ollama").args(["serve"]);
//!
//! let mut daemon = supervisor.spawn(spec)?;
//!
//! // Block until the daemon exits
//! let status = daemon.wait().await?;
//! println!("daemon exited: {}", status);
//! # Ok(())
//! # }
//! ```

pub mod daemon;
pub mod error;
pub mod spec;
pub mod supervisor;

pub use daemon::DaemonHandle;
pub use error::{ProcessError, Result};
pub use spec::DaemonSpec;
pub use supervisor::Supervisor;
