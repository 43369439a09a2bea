//! reqwest-backed plugin source.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::addons_traits::PluginSource;
use crate::errors::{Error, Result};

/// Plugin binaries are a few megabytes; allow more than the API timeout.
const DOWNLOAD_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct HttpPluginSource {
    client: reqwest::Client,
}

impl HttpPluginSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Plugin(format!("Failed to initialize HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("[Addons] GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Plugin(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Plugin(format!("{} answered HTTP {}", url, status)));
        }
        Ok(response)
    }
}

#[async_trait]
impl PluginSource for HttpPluginSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| Error::Plugin(format!("Failed to read {}: {}", url, e)))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| Error::Plugin(format!("Failed to download {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }
}
