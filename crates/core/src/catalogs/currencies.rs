//! Currencies shown in the currency section.

use super::CatalogEntry;

/// Currencies read directly from `account/wallet`.
pub static WALLET_CURRENCIES: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(28, "magnetite_shards"),
    CatalogEntry::new(39, "gaeting_crystals"),
];

/// Account-bound items counted across characters, shared inventory,
/// material storage and bank.
pub static INVENTORY_CURRENCIES: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(77302, "legendary_insight"),
    CatalogEntry::new(88485, "legendary_divination"),
];
