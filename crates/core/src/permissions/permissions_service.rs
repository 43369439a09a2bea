use log::info;
use raidexplorer_gw2_api::{AccountApi, ApiError};

use super::permissions_model::GrantSet;

/// Fetches `tokeninfo` for `secret` and returns the granted scopes.
///
/// Errors are returned unclassified; the caller decides whether an invalid
/// credential aborts the cycle.
pub async fn resolve_grants(api: &dyn AccountApi, secret: &str) -> Result<GrantSet, ApiError> {
    let info = api.token_info(secret).await?;
    let grants = GrantSet::from_names(&info.permissions);
    info!(
        "[Permissions] Resolved {} of {} scopes",
        grants.len(),
        raidexplorer_gw2_api::Scope::ALL.len()
    );
    Ok(grants)
}
