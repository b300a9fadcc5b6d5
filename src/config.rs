use anyhow::{Context, Result};
use std::time::Duration;

/// Default request timeout. The reference client had none, which could leave
/// the UI pending indefinitely; 10 seconds bounds every remote call.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the website backend (e.g., "https://example.com").
    pub api_base_url: String,

    /// Timeout applied to every outbound request.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("API_BASE_URL")
            .context("API_BASE_URL not set")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_base_url,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build the shared HTTP client used by both the translator and the CRUD
    /// surface.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
