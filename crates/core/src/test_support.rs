//! Hand-written account API double shared by the crate's unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use raidexplorer_gw2_api::{
    AccountApi, AchievementProgress, ApiError, Bag, Character, EquipmentItem, ItemSlot,
    MaterialSlot, Resource, TokenInfo, WalletEntry,
};
use tokio::sync::Notify;

pub(crate) const TEST_SECRET: &str =
    "AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEEFFFFFFFF-0000-1111-2222-333333333333";

#[derive(Default)]
pub(crate) struct MockAccountApi {
    pub permissions: Vec<String>,
    pub raids: Vec<String>,
    pub achievements: Vec<AchievementProgress>,
    pub minis: Vec<u32>,
    pub skins: Vec<u32>,
    pub characters: Vec<Character>,
    pub shared_inventory: Vec<Option<ItemSlot>>,
    pub materials: Vec<MaterialSlot>,
    pub bank: Vec<Option<ItemSlot>>,
    pub wallet: Vec<WalletEntry>,
    /// Resources that answer with the given HTTP status instead of data.
    pub failures: HashMap<Resource, u16>,
    /// When set, `token_info` waits for a notification before answering.
    pub hold_token_info: Option<Arc<Notify>>,
    pub call_log: Arc<Mutex<Vec<Resource>>>,
}

impl MockAccountApi {
    pub fn with_permissions(scopes: &[&str]) -> Self {
        Self {
            permissions: scopes.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing(mut self, resource: Resource, status: u16) -> Self {
        self.failures.insert(resource, status);
        self
    }

    pub fn calls(&self) -> Vec<Resource> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, resource: Resource) -> Result<(), ApiError> {
        self.call_log.lock().unwrap().push(resource);
        match self.failures.get(&resource) {
            Some(status) => Err(ApiError::from_status(
                resource.path(),
                *status,
                format!("mock status {}", status),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountApi for MockAccountApi {
    async fn token_info(&self, _access_token: &str) -> Result<TokenInfo, ApiError> {
        if let Some(gate) = &self.hold_token_info {
            gate.notified().await;
        }
        self.record(Resource::TokenInfo)?;
        Ok(TokenInfo {
            id: Some("AAAAAAAA".to_string()),
            name: Some("mock".to_string()),
            permissions: self.permissions.clone(),
        })
    }

    async fn completed_raid_encounters(&self, _access_token: &str) -> Result<Vec<String>, ApiError> {
        self.record(Resource::AccountRaids)?;
        Ok(self.raids.clone())
    }

    async fn achievements(&self, _access_token: &str) -> Result<Vec<AchievementProgress>, ApiError> {
        self.record(Resource::AccountAchievements)?;
        Ok(self.achievements.clone())
    }

    async fn minis(&self, _access_token: &str) -> Result<Vec<u32>, ApiError> {
        self.record(Resource::AccountMinis)?;
        Ok(self.minis.clone())
    }

    async fn skins(&self, _access_token: &str) -> Result<Vec<u32>, ApiError> {
        self.record(Resource::AccountSkins)?;
        Ok(self.skins.clone())
    }

    async fn character_names(&self, _access_token: &str) -> Result<Vec<String>, ApiError> {
        self.record(Resource::Characters)?;
        Ok(self.characters.iter().map(|c| c.name.clone()).collect())
    }

    async fn characters(
        &self,
        names: &[String],
        _access_token: &str,
    ) -> Result<Vec<Character>, ApiError> {
        self.record(Resource::Characters)?;
        Ok(self
            .characters
            .iter()
            .filter(|c| names.contains(&c.name))
            .cloned()
            .collect())
    }

    async fn shared_inventory(&self, _access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError> {
        self.record(Resource::AccountInventory)?;
        Ok(self.shared_inventory.clone())
    }

    async fn materials(&self, _access_token: &str) -> Result<Vec<MaterialSlot>, ApiError> {
        self.record(Resource::AccountMaterials)?;
        Ok(self.materials.clone())
    }

    async fn bank(&self, _access_token: &str) -> Result<Vec<Option<ItemSlot>>, ApiError> {
        self.record(Resource::AccountBank)?;
        Ok(self.bank.clone())
    }

    async fn wallet(&self, _access_token: &str) -> Result<Vec<WalletEntry>, ApiError> {
        self.record(Resource::AccountWallet)?;
        Ok(self.wallet.clone())
    }
}

pub(crate) fn slot(id: u32, count: u32) -> Option<ItemSlot> {
    Some(ItemSlot { id, count })
}

pub(crate) fn material(id: u32, count: u32) -> MaterialSlot {
    MaterialSlot {
        id,
        category: Some(38),
        count,
    }
}

/// A character wearing `equipped` items and carrying one bag with `bag_slots`.
pub(crate) fn character(name: &str, equipped: &[u32], bag_slots: Vec<Option<ItemSlot>>) -> Character {
    Character {
        name: name.to_string(),
        equipment: Some(
            equipped
                .iter()
                .map(|id| EquipmentItem {
                    id: Some(*id),
                    slot: Some("Accessory1".to_string()),
                })
                .collect(),
        ),
        bags: Some(vec![
            None,
            Some(Bag {
                id: 8932,
                size: bag_slots.len() as u32,
                inventory: bag_slots,
            }),
        ]),
    }
}
