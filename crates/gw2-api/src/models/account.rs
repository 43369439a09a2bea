use serde::{Deserialize, Serialize};

/// One entry of `account/wallet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    pub id: u32,
    pub value: u64,
}

/// One entry of `account/achievements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub id: u32,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub current: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

/// An occupied inventory slot (character bags, shared inventory, bank).
///
/// Empty slots are `null` in the API and are modelled as `Option<ItemSlot>`
/// by the containers that hold them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub id: u32,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// One entry of `account/materials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSlot {
    pub id: u32,
    #[serde(default)]
    pub category: Option<u32>,
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_with_empty_slots() {
        let json = r#"[null, {"id": 77302, "count": 4}, null, {"id": 19721, "count": 250}]"#;
        let bank: Vec<Option<ItemSlot>> = serde_json::from_str(json).unwrap();
        assert_eq!(bank.len(), 4);
        assert!(bank[0].is_none());
        assert_eq!(bank[1], Some(ItemSlot { id: 77302, count: 4 }));
    }

    #[test]
    fn test_item_slot_ignores_extra_fields() {
        let json = r#"{"id": 88485, "count": 2, "binding": "Account", "charges": 1}"#;
        let slot: ItemSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot, ItemSlot { id: 88485, count: 2 });
    }

    #[test]
    fn test_achievement_done_defaults_to_false() {
        let json = r#"[{"id": 3019, "current": 1, "max": 2}, {"id": 2657, "done": true}]"#;
        let achievements: Vec<AchievementProgress> = serde_json::from_str(json).unwrap();
        assert!(!achievements[0].done);
        assert_eq!(achievements[0].max, Some(2));
        assert!(achievements[1].done);
    }

    #[test]
    fn test_material_slot_deserialization() {
        let json = r#"{"id": 77302, "category": 38, "count": 5}"#;
        let slot: MaterialSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.count, 5);
        assert_eq!(slot.category, Some(38));
    }
}
