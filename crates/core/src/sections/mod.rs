//! Sections module - the five data categories shown after a load.
//!
//! Each section is gated by its toggle and by the key's grant set, fetches its
//! own resources, and reduces them against a reference catalog. Fetching lives
//! in [`load_section`]; the reducers are pure and can be tested without I/O.

mod sections_loader;
mod sections_model;
mod sections_reducers;


pub use sections_loader::{fetch_account_holdings, load_section};
pub use sections_model::{
    CurrencyTotal, ItemFlag, PermissionDenial, SectionKind, SectionResult, SectionToggles,
};
pub use sections_reducers::{
    count_item, merge_currency, reduce_achievements, reduce_bosses, reduce_unlocks,
    AccountHoldings,
};
