//! Raid Explorer Core - domain models, services, and traits.
//!
//! This crate holds the data-aggregation pipeline: stored credentials, the
//! grant set of a key, the five gated section loaders and their reducers,
//! and the load cycle orchestrator that runs them. It also hosts the small
//! auxiliary services (plugin updater, version check, reference links).
//! Storage and presentation are left to the caller through traits.

pub mod addons;
pub mod catalogs;
pub mod credentials;
pub mod errors;
pub mod links;
pub mod load_cycle;
pub mod permissions;
pub mod sections;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
