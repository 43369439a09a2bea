//! Permissions module - the grant set of an API key and its resolution.

mod permissions_model;
mod permissions_service;

pub use permissions_model::{GrantSet, ScopeStatus};
pub use permissions_service::resolve_grants;
