//! Checks whether a newer release has been published.

mod updates_model;
mod updates_service;

pub use updates_model::{ReleaseInfo, VersionStatus};
pub use updates_service::{check_for_update, compare_versions, DEFAULT_VERSION_URL};
