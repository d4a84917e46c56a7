//! Command handlers, thin wrappers over the library crates

use std::path::PathBuf;

use anyhow::Context;
use preflight_config::{ConfigLoader, Settings};
use preflight_launcher::Launcher;
use preflight_ollama::{OllamaApi, OllamaBinary};

/// Load settings, honoring an explicit config path and a CLI model override
fn load_settings(config: Option<PathBuf>, model: Option<String>) -> anyhow::Result<Settings> {
    let loader = match config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let mut settings = loader.load().context("Failed to load configuration")?;
    if let Some(model) = model {
        settings.model = model;
    }
    Ok(settings)
}

/// `preflight up` - the full bootstrap flow
pub async fn up(config: Option<PathBuf>, model: Option<String>) -> anyhow::Result<()> {
    let settings = load_settings(config, model)?;
    let launcher = Launcher::new(settings)?;
    launcher.run().await?;
    Ok(())
}

/// `preflight pull` - pull one model against a running daemon
pub async fn pull(config: Option<PathBuf>, model: Option<String>) -> anyhow::Result<()> {
    let settings = load_settings(config, model)?;
    let binary = OllamaBinary::new(&settings.ollama_bin)?;
    binary.pull(&settings.model).await?;
    Ok(())
}

/// `preflight status` - daemon health and installed models
pub async fn status(config: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = load_settings(config, None)?;
    let api = OllamaApi::new(&settings.base_url)?;

    if !api.health_check().await? {
        println!("Ollama daemon is not reachable at {}", settings.base_url);
        std::process::exit(1);
    }

    println!("Ollama daemon is running at {}", settings.base_url);

    let models = api.list_models().await?;
    if models.is_empty() {
        println!("No models installed");
    } else {
        println!("Installed models:");
        for model in models {
            println!("  {:<40} {:>10}", model.name, model.size_display());
        }
    }
    Ok(())
}
