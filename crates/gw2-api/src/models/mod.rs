//! Wire models for the account resources.
//!
//! These mirror the JSON shapes returned by the API closely; interpretation
//! (matching against catalogs, summing counts) happens in the core crate.

mod account;
mod character;
mod token;

pub use account::{AchievementProgress, ItemSlot, MaterialSlot, WalletEntry};
pub use character::{Bag, Character, EquipmentItem};
pub use token::{Scope, TokenInfo};
