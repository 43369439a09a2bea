//! Static reference catalogs.
//!
//! Each catalog is a fixed, ordered list mapping the identifier the API
//! reports (encounter id, achievement id, mini id, skin id, currency id) to
//! the display slot it is rendered in. Order is display order.

mod achievements;
mod bosses;
mod currencies;
mod minis;
mod skins;

#[cfg(test)]
mod catalogs_tests;

pub use achievements::ACHIEVEMENTS;
pub use bosses::BOSSES;
pub use currencies::{INVENTORY_CURRENCIES, WALLET_CURRENCIES};
pub use minis::MINIS;
pub use skins::SKINS;

use serde::Serialize;

/// One entry of a reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogEntry<I: 'static> {
    pub id: I,
    pub slot: &'static str,
}

impl<I> CatalogEntry<I> {
    pub const fn new(id: I, slot: &'static str) -> Self {
        Self { id, slot }
    }
}
