use serde::{Deserialize, Serialize};

use super::account::ItemSlot;

/// A character as returned by the `characters` batch resource.
///
/// Only the parts needed to count items are modelled. Both `equipment` and
/// `bags` can be missing or `null` depending on the key's scopes and the
/// character's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub equipment: Option<Vec<EquipmentItem>>,
    #[serde(default)]
    pub bags: Option<Vec<Option<Bag>>>,
}

/// An equipped item. Equipment entries carry no quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub slot: Option<String>,
}

/// A bag equipped in one of the character's bag slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    pub id: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub inventory: Vec<Option<ItemSlot>>,
}

impl Character {
    /// Equipped items, treating a missing list as empty.
    pub fn equipped_items(&self) -> &[EquipmentItem] {
        self.equipment.as_deref().unwrap_or_default()
    }

    /// Bags that are actually present (empty bag slots are skipped).
    pub fn present_bags(&self) -> impl Iterator<Item = &Bag> {
        self.bags.iter().flatten().flatten()
    }
}
