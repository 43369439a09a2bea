//! Gated, sequential fetching for each section.

use log::{debug, info};
use raidexplorer_gw2_api::{AccountApi, ApiError};

use super::sections_model::{PermissionDenial, SectionKind, SectionResult, SectionToggles};
use super::sections_reducers::{
    merge_currency, reduce_achievements, reduce_bosses, reduce_unlocks, AccountHoldings,
};
use crate::catalogs::{MINIS, SKINS};
use crate::permissions::GrantSet;

/// Loads one section.
///
/// A disabled toggle or a missing scope returns without issuing any request.
/// Otherwise the section's resources are fetched one after another and
/// reduced. Fetch errors are returned as-is for the caller to classify.
pub async fn load_section(
    kind: SectionKind,
    api: &dyn AccountApi,
    secret: &str,
    grants: &GrantSet,
    toggles: &SectionToggles,
) -> Result<SectionResult, ApiError> {
    if !toggles.is_enabled(kind) {
        debug!("[Sections] {} disabled, skipping", kind);
        return Ok(SectionResult::Disabled);
    }

    let missing = grants.missing(kind.required_scopes());
    if !missing.is_empty() {
        info!(
            "[Sections] {} skipped, missing scopes: {:?}",
            kind, missing
        );
        return Ok(SectionResult::MissingPermission(PermissionDenial::new(
            kind, missing,
        )));
    }

    let result = match kind {
        SectionKind::Bosses => {
            let completed = api.completed_raid_encounters(secret).await?;
            SectionResult::Flags(reduce_bosses(&completed))
        }
        SectionKind::Currency => {
            let holdings = fetch_account_holdings(api, secret).await?;
            SectionResult::Currency(merge_currency(&holdings))
        }
        SectionKind::Achievements => {
            let records = api.achievements(secret).await?;
            SectionResult::Flags(reduce_achievements(&records))
        }
        SectionKind::Minis => {
            let unlocked = api.minis(secret).await?;
            SectionResult::Flags(reduce_unlocks(MINIS, &unlocked))
        }
        SectionKind::Skins => {
            let unlocked = api.skins(secret).await?;
            SectionResult::Flags(reduce_unlocks(SKINS, &unlocked))
        }
    };

    Ok(result)
}

/// Fetches everything the currency section counts, in a fixed order:
/// character names, character details, shared inventory, material storage,
/// bank, wallet.
pub async fn fetch_account_holdings(
    api: &dyn AccountApi,
    secret: &str,
) -> Result<AccountHoldings, ApiError> {
    let names = api.character_names(secret).await?;
    let characters = if names.is_empty() {
        Vec::new()
    } else {
        api.characters(&names, secret).await?
    };
    let shared_inventory = api.shared_inventory(secret).await?;
    let materials = api.materials(secret).await?;
    let bank = api.bank(secret).await?;
    let wallet = api.wallet(secret).await?;

    debug!(
        "[Sections] Holdings: {} characters, {} shared slots, {} materials, {} bank slots, {} wallet entries",
        characters.len(),
        shared_inventory.len(),
        materials.len(),
        bank.len(),
        wallet.len()
    );

    Ok(AccountHoldings {
        characters,
        shared_inventory,
        materials,
        bank,
        wallet,
    })
}
