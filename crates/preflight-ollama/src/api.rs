//! HTTP client for the Ollama API
//!
//! Used for the readiness probe and for listing installed models. Connection
//! pooling and keep-alive are tuned for a localhost daemon that may not be up
//! yet when the first request goes out.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{error::OllamaError, models::InstalledModel, Result};

/// Default timeout for Ollama API requests (30 seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default pool idle timeout (90 seconds)
const DEFAULT_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Default TCP keep-alive interval (60 seconds)
const DEFAULT_TCP_KEEPALIVE_SECS: u64 = 60;

/// Health check timeout (5 seconds)
const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// First readiness probe retry interval (250ms)
const PROBE_INITIAL_BACKOFF_MS: u64 = 250;

/// Readiness probe retry interval ceiling (4 seconds)
const PROBE_MAX_BACKOFF_MS: u64 = 4_000;

/// Ollama API response for tags
#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    models: Option<Vec<OllamaModelTag>>,
}

/// Ollama model tag
#[derive(Debug, Deserialize)]
struct OllamaModelTag {
    name: String,
    digest: String,
    modified_at: chrono::DateTime<chrono::Utc>,
    size: u64,
}

/// HTTP-side view of the Ollama daemon
pub struct OllamaApi {
    client: Arc<Client>,
    base_url: String,
}

impl OllamaApi {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - The Ollama server URL (e.g., "http://localhost:11434")
    ///
    /// # Errors
    /// Returns `ConfigError` if base_url is empty
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(OllamaError::ConfigError(
                "Ollama base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT_SECS))
            .tcp_keepalive(Duration::from_secs(DEFAULT_TCP_KEEPALIVE_SECS))
            .build()
            .map_err(|e| OllamaError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the Ollama server is reachable and responding
    ///
    /// Hits the root endpoint with a short timeout. Unreachability is a
    /// `false`, not an error.
    pub async fn health_check(&self) -> Result<bool> {
        debug!(base_url = %self.base_url, "Probing Ollama server");

        let url = format!("{}/", self.base_url);

        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(response) => {
                let healthy = response.status().is_success();
                if healthy {
                    debug!("Ollama server health check passed");
                } else {
                    warn!(status = %response.status(), "Ollama server health check failed");
                }
                Ok(healthy)
            }
            Err(e) => {
                debug!(error = %e, "Ollama server not reachable");
                Ok(false)
            }
        }
    }

    /// Wait until the daemon answers health checks
    ///
    /// Sleeps `grace` before the first probe, then retries with exponential
    /// backoff (250ms doubling, capped at 4s) until the daemon is healthy or
    /// `budget` has elapsed since the call began. The grace period counts
    /// against the budget.
    ///
    /// # Errors
    /// Returns `NotReady` if the budget runs out.
    pub async fn wait_ready(&self, grace: Duration, budget: Duration) -> Result<()> {
        let started = Instant::now();

        if !grace.is_zero() {
            debug!(grace_secs = grace.as_secs(), "Startup grace period");
            tokio::time::sleep(grace).await;
        }

        let mut backoff = Duration::from_millis(PROBE_INITIAL_BACKOFF_MS);
        loop {
            if self.health_check().await? {
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Ollama daemon is ready"
                );
                return Ok(());
            }

            if started.elapsed() + backoff > budget {
                warn!(budget_secs = budget.as_secs(), "Daemon readiness budget exhausted");
                return Err(OllamaError::NotReady(budget));
            }

            debug!(backoff_ms = backoff.as_millis() as u64, "Daemon not ready, retrying");
            tokio::time::sleep(backoff).await;
            backoff = (backoff * 2).min(Duration::from_millis(PROBE_MAX_BACKOFF_MS));
        }
    }

    /// List all installed models
    pub async fn list_models(&self) -> Result<Vec<InstalledModel>> {
        debug!("Listing installed models");

        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(OllamaError::NetworkError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let tags: OllamaTagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::NetworkError(e.to_string()))?;

        let models: Vec<InstalledModel> = tags
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|m| InstalledModel {
                name: m.name,
                size: m.size,
                digest: m.digest,
                modified_at: m.modified_at,
            })
            .collect();

        debug!(count = models.len(), "Listed installed models");
        Ok(models)
    }
}
