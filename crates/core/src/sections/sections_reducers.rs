//! Pure reducers from raw account records to section results.

use std::collections::HashSet;

use log::warn;
use raidexplorer_gw2_api::{AchievementProgress, Character, ItemSlot, MaterialSlot, WalletEntry};

use super::sections_model::{CurrencyTotal, ItemFlag};
use crate::catalogs::{CatalogEntry, ACHIEVEMENTS, BOSSES, INVENTORY_CURRENCIES, WALLET_CURRENCIES};

/// Everything the currency section reads, fetched in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountHoldings {
    pub characters: Vec<Character>,
    pub shared_inventory: Vec<Option<ItemSlot>>,
    pub materials: Vec<MaterialSlot>,
    pub bank: Vec<Option<ItemSlot>>,
    pub wallet: Vec<WalletEntry>,
}

/// Flags every boss whose encounter id appears in `completed`.
pub fn reduce_bosses(completed: &[String]) -> Vec<ItemFlag> {
    let completed: HashSet<&str> = completed.iter().map(String::as_str).collect();
    BOSSES
        .iter()
        .map(|boss| ItemFlag {
            id: boss.id.to_string(),
            slot: boss.slot,
            done: completed.contains(boss.id),
        })
        .collect()
}

/// Flags an achievement only when a record for it exists and is done.
///
/// A partially completed record (`done: false`) leaves the flag off.
pub fn reduce_achievements(records: &[AchievementProgress]) -> Vec<ItemFlag> {
    let done: HashSet<u32> = records
        .iter()
        .filter(|record| record.done)
        .map(|record| record.id)
        .collect();
    ACHIEVEMENTS
        .iter()
        .map(|achievement| ItemFlag {
            id: achievement.id.to_string(),
            slot: achievement.slot,
            done: done.contains(&achievement.id),
        })
        .collect()
}

/// Flags every catalog entry whose id is in the unlocked list (minis, skins).
pub fn reduce_unlocks(catalog: &[CatalogEntry<u32>], unlocked: &[u32]) -> Vec<ItemFlag> {
    let unlocked: HashSet<u32> = unlocked.iter().copied().collect();
    catalog
        .iter()
        .map(|entry| ItemFlag {
            id: entry.id.to_string(),
            slot: entry.slot,
            done: unlocked.contains(&entry.id),
        })
        .collect()
}

/// Total quantity of `item_id` held across the account.
///
/// Equipped items count one each; bag, shared inventory and bank slots count
/// their stack size. Material storage holds a single slot per item, so only
/// the first matching entry is counted.
pub fn count_item(holdings: &AccountHoldings, item_id: u32) -> u64 {
    let mut total: u64 = 0;

    for character in &holdings.characters {
        total += character
            .equipped_items()
            .iter()
            .filter(|item| item.id == Some(item_id))
            .count() as u64;

        total += character
            .present_bags()
            .map(|bag| sum_slots(&bag.inventory, item_id))
            .sum::<u64>();
    }

    total += sum_slots(&holdings.shared_inventory, item_id);

    let mut materials = holdings.materials.iter().filter(|m| m.id == item_id);
    if let Some(material) = materials.next() {
        total += u64::from(material.count);
        if materials.next().is_some() {
            warn!(
                "[Sections] Material storage lists item {} more than once; counting the first entry",
                item_id
            );
        }
    }

    total += sum_slots(&holdings.bank, item_id);
    total
}

fn sum_slots(slots: &[Option<ItemSlot>], item_id: u32) -> u64 {
    slots
        .iter()
        .flatten()
        .filter(|slot| slot.id == item_id)
        .map(|slot| u64::from(slot.count))
        .sum()
}

/// Currency section result: wallet balances, then account-wide item counts.
pub fn merge_currency(holdings: &AccountHoldings) -> Vec<CurrencyTotal> {
    let wallet = WALLET_CURRENCIES.iter().map(|currency| CurrencyTotal {
        id: currency.id,
        slot: currency.slot,
        value: holdings
            .wallet
            .iter()
            .find(|entry| entry.id == currency.id)
            .map(|entry| entry.value),
    });

    let counted = INVENTORY_CURRENCIES.iter().map(|currency| CurrencyTotal {
        id: currency.id,
        slot: currency.slot,
        value: Some(count_item(holdings, currency.id)),
    });

    wallet.chain(counted).collect()
}
