//! Addons module - installs and updates the ArcDps game plugins.

mod addons_model;
mod addons_service;
mod addons_traits;
mod http_source;

#[cfg(test)]
mod addons_service_tests;

pub use addons_model::{ChecksumFormat, Plugin, PluginFile, UpdateOutcome};
pub use addons_service::{file_md5, verify_installation_folder, PluginUpdater};
pub use addons_traits::PluginSource;
pub use http_source::HttpPluginSource;
