use async_trait::async_trait;

use crate::errors::Result;

/// Remote source of plugin checksums and binaries.
#[async_trait]
pub trait PluginSource: Send + Sync {
    /// Downloads a small text file (checksum files).
    async fn fetch_text(&self, url: &str) -> Result<String>;

    /// Downloads a binary file.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
