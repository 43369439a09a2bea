//! Raid Explorer GW2 API Crate
//!
//! This crate is the thin request/response layer over the public, read-only
//! Guild Wars 2 REST API (`https://api.guildwars2.com/v2`). It knows how to
//! address account resources, how to attach an access token, and how to turn
//! HTTP failures into classified errors. It does not retry, cache, or
//! interpret the data it returns.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Core Loaders   | --> |   AccountApi     |  (trait seam, mockable)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  Gw2ApiClient    |  (reqwest)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | Resource + URL   |  (path, ids, access_token)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | ApiError / model |  (classified failure or data)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AccountApi`] - The collaborator interface the core calls through
//! - [`Gw2ApiClient`] - HTTP implementation of [`AccountApi`]
//! - [`Resource`] - The account resources this application reads
//! - [`ApiError`] / [`FailureClass`] - Classified fetch errors
//! - [`Scope`] - Capability scopes an API key may grant

pub mod client;
pub mod errors;
pub mod models;
pub mod resources;

pub use client::{AccountApi, Gw2ApiClient, DEFAULT_API_BASE_URL};
pub use errors::{ApiError, FailureClass};
pub use models::{
    AchievementProgress, Bag, Character, EquipmentItem, ItemSlot, MaterialSlot, Scope, TokenInfo,
    WalletEntry,
};
pub use resources::{build_url, redact_token, Resource};
