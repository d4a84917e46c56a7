// Command definitions and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

/// Preflight - boot a local Ollama daemon and warm up a model
#[derive(Parser, Debug)]
#[command(name = "preflight")]
#[command(bin_name = "preflight")]
#[command(about = "Boot a local Ollama daemon and warm up a model")]
#[command(
    long_about = "Preflight: start `ollama serve` in the background, wait until the daemon answers health checks, pull the configured model, then keep supervising the daemon.\n\nThe model defaults to granite3.1-moe:1b and can be overridden with --model, the MODEL_NAME environment variable, or the config file."
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/preflight/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the daemon, pull the model, and supervise
    #[command(about = "Start the Ollama daemon, pull the model, and supervise it")]
    Up {
        /// Model to pull (overrides env and config file)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Pull a model against an already-running daemon
    #[command(about = "Pull a model without starting the daemon")]
    Pull {
        /// Model to pull (default: the configured model)
        #[arg(value_name = "MODEL")]
        model: Option<String>,
    },

    /// Show daemon health and installed models
    #[command(about = "Check daemon health and list installed models")]
    Status,
}

impl Cli {
    /// Dispatch the parsed command
    pub async fn dispatch(self) -> anyhow::Result<()> {
        let config = self.config.clone();
        match self.command {
            // `preflight` alone is `preflight up`, like the original script
            None => commands::up(config, None).await,
            Some(Commands::Up { model }) => commands::up(config, model).await,
            Some(Commands::Pull { model }) => commands::pull(config, model).await,
            Some(Commands::Status) => commands::status(config).await,
        }
    }
}
