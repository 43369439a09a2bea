use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use raidexplorer_core::credentials::CredentialService;
use raidexplorer_gw2_api::{AccountApi, Gw2ApiClient};

use crate::config::Config;
use crate::credentials_store::FileCredentialStore;
use crate::settings_store::SettingsStore;

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded to it.
pub fn init_tracing(log_format: &str, verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(verbose)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Services shared by the commands.
pub struct AppState {
    pub config: Config,
    pub credentials: CredentialService,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let credentials = CredentialService::new(Arc::new(FileCredentialStore::new(
            config.credentials_path(),
        )));
        let settings = SettingsStore::new(config.settings_path());
        tracing::debug!("Data directory in use: {}", config.data_dir.display());
        Self {
            config,
            credentials,
            settings,
        }
    }

    pub fn account_api(&self) -> anyhow::Result<Arc<dyn AccountApi>> {
        let client = Gw2ApiClient::new(&self.config.api_base_url)?;
        Ok(Arc::new(client))
    }
}
