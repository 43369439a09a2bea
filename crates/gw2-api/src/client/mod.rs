//! The account API collaborator interface and its HTTP implementation.

mod http;

pub use http::{Gw2ApiClient, DEFAULT_API_BASE_URL};

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{AchievementProgress, Character, ItemSlot, MaterialSlot, TokenInfo, WalletEntry};

/// Trait for reading account resources.
///
/// Every call borrows the access token for its own duration only; the
/// implementation never stores it. Empty inventory/bank slots are returned as
/// `None` so callers can skip them.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// `tokeninfo`: the key's name and granted scopes.
    async fn token_info(&self, access_token: &str) -> Result<TokenInfo, ApiError>;

    /// `account/raids`: identifiers of encounters completed this week.
    async fn completed_raid_encounters(&self, access_token: &str) -> Result<Vec<String>, ApiError>;

    /// `account/achievements`: progress records for every started achievement.
    async fn achievements(&self, access_token: &str) -> Result<Vec<AchievementProgress>, ApiError>;

    /// `account/minis`: unlocked miniature ids.
    async fn minis(&self, access_token: &str) -> Result<Vec<u32>, ApiError>;

    /// `account/skins`: unlocked skin ids.
    async fn skins(&self, access_token: &str) -> Result<Vec<u32>, ApiError>;

    /// `characters`: names of every character on the account.
    async fn character_names(&self, access_token: &str) -> Result<Vec<String>, ApiError>;

    /// `characters?ids=...`: full character objects for the given names.
    ///
    /// An empty name list yields an empty result without a request.
    async fn characters(
        &self,
        names: &[String],
        access_token: &str,
    ) -> Result<Vec<Character>, ApiError>;

    /// `account/inventory`: shared inventory slots.
    async fn shared_inventory(&self, access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError>;

    /// `account/materials`: material storage entries.
    async fn materials(&self, access_token: &str) -> Result<Vec<MaterialSlot>, ApiError>;

    /// `account/bank`: bank tab slots.
    async fn bank(&self, access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError>;

    /// `account/wallet`: wallet currency balances.
    async fn wallet(&self, access_token: &str) -> Result<Vec<WalletEntry>, ApiError>;
}
