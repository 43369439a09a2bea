//! HTTP client for the Guild Wars 2 API.

use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::AccountApi;
use crate::errors::ApiError;
use crate::models::{AchievementProgress, Character, ItemSlot, MaterialSlot, TokenInfo, WalletEntry};
use crate::resources::{build_url, redact_token, Resource};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the public API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.guildwars2.com/v2";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Batch resources answer a single-id request with a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GW2 API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the account resources of the GW2 API.
///
/// # Example
///
/// ```ignore
/// let client = Gw2ApiClient::new(DEFAULT_API_BASE_URL)?;
/// let info = client.token_info("XXXXXXXX-...").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Gw2ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Gw2ApiClient {
    /// Create a new client against `base_url` (normally [`DEFAULT_API_BASE_URL`]).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request for a resource and parse the response.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: Resource,
        ids: &[String],
        access_token: &str,
    ) -> Result<T, ApiError> {
        let url = build_url(&self.base_url, resource, ids, Some(access_token));
        debug!("[Gw2Api] GET {}", redact_token(&url));

        let response = self.client.get(&url).send().await?;
        Self::parse_response(resource, response).await
    }

    /// Parse an HTTP response, classifying failures by status.
    async fn parse_response<T: DeserializeOwned>(
        resource: Resource,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => err
                    .text
                    .or(err.error)
                    .unwrap_or_else(|| format!("HTTP {}", status)),
                Err(_) => body.chars().take(200).collect::<String>(),
            };
            debug!(
                "[Gw2Api] {} answered {}: {}",
                resource.path(),
                status.as_u16(),
                message
            );
            return Err(ApiError::from_status(resource.path(), status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            resource: resource.path().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl AccountApi for Gw2ApiClient {
    async fn token_info(&self, access_token: &str) -> Result<TokenInfo, ApiError> {
        let info: TokenInfo = self.get(Resource::TokenInfo, &[], access_token).await?;
        info!(
            "[Gw2Api] Token '{}' grants {} scopes",
            info.name.as_deref().unwrap_or("unnamed"),
            info.permissions.len()
        );
        Ok(info)
    }

    async fn completed_raid_encounters(&self, access_token: &str) -> Result<Vec<String>, ApiError> {
        self.get(Resource::AccountRaids, &[], access_token).await
    }

    async fn achievements(&self, access_token: &str) -> Result<Vec<AchievementProgress>, ApiError> {
        self.get(Resource::AccountAchievements, &[], access_token)
            .await
    }

    async fn minis(&self, access_token: &str) -> Result<Vec<u32>, ApiError> {
        self.get(Resource::AccountMinis, &[], access_token).await
    }

    async fn skins(&self, access_token: &str) -> Result<Vec<u32>, ApiError> {
        self.get(Resource::AccountSkins, &[], access_token).await
    }

    async fn character_names(&self, access_token: &str) -> Result<Vec<String>, ApiError> {
        self.get(Resource::Characters, &[], access_token).await
    }

    async fn characters(
        &self,
        names: &[String],
        access_token: &str,
    ) -> Result<Vec<Character>, ApiError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let characters: OneOrMany<Character> =
            self.get(Resource::Characters, names, access_token).await?;
        let characters = characters.into_vec();
        info!("[Gw2Api] Fetched {} characters", characters.len());
        Ok(characters)
    }

    async fn shared_inventory(&self, access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError> {
        self.get(Resource::AccountInventory, &[], access_token).await
    }

    async fn materials(&self, access_token: &str) -> Result<Vec<MaterialSlot>, ApiError> {
        self.get(Resource::AccountMaterials, &[], access_token).await
    }

    async fn bank(&self, access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError> {
        self.get(Resource::AccountBank, &[], access_token).await
    }

    async fn wallet(&self, access_token: &str) -> Result<Vec<WalletEntry>, ApiError> {
        self.get(Resource::AccountWallet, &[], access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Gw2ApiClient::new(DEFAULT_API_BASE_URL);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = Gw2ApiClient::new("https://api.guildwars2.com/v2/").unwrap();
        assert_eq!(client.base_url(), "https://api.guildwars2.com/v2");
    }

    #[test]
    fn test_one_or_many_object() {
        let parsed: OneOrMany<Character> =
            serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        let characters = parsed.into_vec();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "Solo");
    }

    #[test]
    fn test_one_or_many_array() {
        let parsed: OneOrMany<Character> =
            serde_json::from_str(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
        assert_eq!(parsed.into_vec().len(), 2);
    }
}
