use std::collections::HashSet;
use std::hash::Hash;

use super::*;

fn assert_unique<I: Eq + Hash + std::fmt::Debug>(catalog: &[CatalogEntry<I>]) {
    let mut ids = HashSet::new();
    let mut slots = HashSet::new();
    for entry in catalog {
        assert!(ids.insert(&entry.id), "duplicate id {:?}", entry.id);
        assert!(slots.insert(entry.slot), "duplicate slot {}", entry.slot);
    }
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(BOSSES.len(), 22);
    assert_eq!(ACHIEVEMENTS.len(), 76);
    assert_eq!(MINIS.len(), 30);
    assert_eq!(SKINS.len(), 57);
    assert_eq!(WALLET_CURRENCIES.len(), 2);
    assert_eq!(INVENTORY_CURRENCIES.len(), 2);
}

#[test]
fn test_catalog_ids_and_slots_are_unique() {
    assert_unique(BOSSES);
    assert_unique(ACHIEVEMENTS);
    assert_unique(MINIS);
    assert_unique(SKINS);

    let currencies: Vec<_> = WALLET_CURRENCIES
        .iter()
        .chain(INVENTORY_CURRENCIES)
        .copied()
        .collect();
    assert_unique(&currencies);
}

#[test]
fn test_boss_order_follows_wings() {
    assert_eq!(BOSSES.first().map(|b| b.id), Some("vale_guardian"));
    assert_eq!(BOSSES.last().map(|b| b.id), Some("qadim"));
    let escort = BOSSES.iter().position(|b| b.id == "escort");
    let xera = BOSSES.iter().position(|b| b.id == "xera");
    assert!(escort < xera);
}

#[test]
fn test_tracked_currency_ids() {
    let wallet: Vec<u32> = WALLET_CURRENCIES.iter().map(|c| c.id).collect();
    let counted: Vec<u32> = INVENTORY_CURRENCIES.iter().map(|c| c.id).collect();
    assert_eq!(wallet, vec![28, 39]);
    assert_eq!(counted, vec![77302, 88485]);
}

#[test]
fn test_achievement_slots_are_grouped_by_wing() {
    let wings: Vec<&str> = ACHIEVEMENTS
        .iter()
        .map(|a| a.slot.split('_').next().unwrap_or_default())
        .collect();
    let mut sorted = wings.clone();
    sorted.sort();
    assert_eq!(wings, sorted);
    assert!(ACHIEVEMENTS.iter().any(|a| a.id == 3019));
}
